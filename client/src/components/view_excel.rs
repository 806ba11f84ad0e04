//! Preview table for the decoded first sheet.
//!
//! The table shows every header cell and at most five data rows; each row
//! renders exactly the cells it has. Loading and failure get a single status
//! line instead of the table.

#[cfg(test)]
#[path = "view_excel_test.rs"]
mod view_excel_test;

use leptos::prelude::*;
use workbook::ParsedTable;

use crate::state::upload::PreviewState;

/// Status text for states that render no table.
pub fn status_message(state: &PreviewState) -> Option<String> {
    match state {
        PreviewState::Empty | PreviewState::Ready { .. } => None,
        PreviewState::Loading(_) => Some("Dosya okunuyor...".to_owned()),
        PreviewState::Failed { reason, .. } => Some(format!("Dosya okunamadı: {reason}")),
    }
}

#[component]
pub fn ViewExcel(#[prop(into)] preview: Signal<PreviewState>) -> impl IntoView {
    move || {
        preview.with(|state| match state {
            PreviewState::Empty => ().into_any(),
            PreviewState::Ready { table, .. } => preview_table(table).into_any(),
            PreviewState::Loading(_) => view! {
                <p class="excel-preview__status">{status_message(state)}</p>
            }
            .into_any(),
            PreviewState::Failed { .. } => view! {
                <p class="excel-preview__error" role="alert">{status_message(state)}</p>
            }
            .into_any(),
        })
    }
}

fn preview_table(table: &ParsedTable) -> impl IntoView + use<> {
    let preview = workbook::preview(table);

    let headers = preview
        .headers
        .iter()
        .map(|header| view! { <th class="excel-preview__th">{header.clone()}</th> })
        .collect_view();
    let rows = preview
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| view! { <td class="excel-preview__td">{cell.to_string()}</td> })
                .collect_view();
            view! { <tr class="excel-preview__row">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="excel-preview">
            <table class="excel-preview__table">
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <p class="excel-preview__caption">{preview.caption()}</p>
        </div>
    }
}
