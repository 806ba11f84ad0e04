//! Send-message page: upload an Excel file, preview it, send.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the composition root of the workflow. It owns the
//! `UploadState` signal, hands the drop zone a selection callback, starts
//! the read-and-decode task for each new file, and feeds the preview from
//! the stored result. The send button is a placeholder: it is enabled once a
//! file is present and issues no request.

use leptos::prelude::*;

use crate::components::step_indicator::StepIndicator;
use crate::components::upload_excel::UploadExcel;
use crate::components::view_excel::ViewExcel;
use crate::state::upload::{FileId, UploadState};
use crate::util::file_read::PickedFile;

#[component]
pub fn SendMessagePage() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());

    let selected = Signal::derive(move || upload.with(|s| s.selected.clone()));
    let preview = Memo::new(move |_| upload.with(|s| s.preview.clone()));
    let step = Memo::new(move |_| upload.with(UploadState::step));
    let can_send = Memo::new(move |_| upload.with(UploadState::can_send));

    let on_select = Callback::new(move |file: PickedFile| {
        if let Some(id) = upload.try_update(|s| s.select(file.name.clone(), file.size)) {
            spawn_decode(upload, id, file);
        }
    });

    let on_send = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(name) = upload.with_untracked(|s| s.file_name().map(str::to_owned)) {
                log::info!("send requested for {name}; no message transport is configured");
            }
        }
    };

    view! {
        <div class="send-message">
            <StepIndicator step=step/>
            <UploadExcel selected=selected on_select=on_select/>
            <ViewExcel preview=preview/>
            <div class="send-message__actions">
                <button
                    class="btn"
                    class:btn--primary=move || can_send.get()
                    class:btn--disabled=move || !can_send.get()
                    disabled=move || !can_send.get()
                    on:click=on_send
                >
                    "Mesaj Gönder"
                </button>
            </div>
        </div>
    }
}

/// Read `file` and decode its first sheet, reporting back under `id`.
fn spawn_decode(upload: RwSignal<UploadState>, id: FileId, file: PickedFile) {
    #[cfg(feature = "hydrate")]
    {
        log::info!(
            "decoding {} ({}) as {id}",
            file.name,
            crate::util::file_read::format_size(file.size)
        );
        leptos::task::spawn_local(async move {
            let result = match file.read_bytes().await {
                Ok(bytes) => workbook::decode_first_sheet(&bytes).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match &result {
                Ok(table) => log::info!("decoded {id}: {} headers, {} rows", table.headers.len(), table.row_count()),
                Err(reason) => log::warn!("decode of {id} failed: {reason}"),
            }
            let applied = upload.try_update(|s| s.finish_decode(id, result)).unwrap_or(false);
            if !applied {
                log::debug!("discarded stale decode result for {id}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (upload, id, file);
    }
}
