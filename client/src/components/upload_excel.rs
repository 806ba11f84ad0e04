//! Drag-and-drop zone with a click-to-pick fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component never stores the selected file. It reports the first file
//! of a drop (or of a picker selection) through `on_select` and renders
//! whatever selection the owning page passes back in.

use leptos::ev::{DragEvent, Event};
use leptos::html::Input;
use leptos::prelude::*;

use crate::state::intake::{DragPhase, DropZoneState, first_file};
use crate::state::upload::SelectedFile;
use crate::util::file_read::{PickedFile, format_size};

/// Extensions offered by the picker dialog. Drops are not filtered.
const ACCEPT: &str = ".xlsx,.xlsm,.xlsb,.xls,.ods";

/// Drop zone that publishes the first dropped or picked file.
#[component]
pub fn UploadExcel(
    /// Current selection, owned by the page.
    #[prop(into)]
    selected: Signal<Option<SelectedFile>>,
    on_select: Callback<PickedFile>,
) -> impl IntoView {
    let zone = RwSignal::new(DropZoneState::default());
    let input_ref = NodeRef::<Input>::new();

    let on_drag_enter = move |ev: DragEvent| {
        suppress(&ev);
        zone.update(|z| z.apply(DragPhase::Enter));
    };
    let on_drag_leave = move |ev: DragEvent| {
        suppress(&ev);
        zone.update(|z| z.apply(DragPhase::Leave));
    };
    // Without preventDefault on dragover the browser refuses the drop.
    let on_drag_over = move |ev: DragEvent| {
        suppress(&ev);
        zone.update(|z| z.apply(DragPhase::Over));
    };
    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        let picked = zone.try_update(|z| z.drop_files(dropped_files(&ev))).flatten();
        if let Some(file) = picked {
            on_select.run(file);
        }
    };

    let on_pick = move |ev: Event| {
        if let Some(file) = first_file(picked_files(&ev)) {
            on_select.run(file);
        }
    };
    let open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    view! {
        <div class="upload-excel">
            <input
                type="file"
                class="upload-excel__input"
                accept=ACCEPT
                node_ref=input_ref
                on:change=on_pick
            />
            <div
                class="drop-zone"
                class:drop-zone--active=move || zone.get().dragging
                on:dragenter=on_drag_enter
                on:dragleave=on_drag_leave
                on:dragover=on_drag_over
                on:drop=on_drop
                on:click=open_picker
            >
                <Show
                    when=move || selected.get().is_some()
                    fallback=|| {
                        view! {
                            <p class="drop-zone__hint">"Excel dosyanızı buraya sürükleyip bırakın"</p>
                            <p class="drop-zone__subhint">"veya buraya tıklayarak dosya seçin"</p>
                        }
                    }
                >
                    <p class="drop-zone__selected">
                        "Seçilen dosya: "
                        <span class="drop-zone__file-name">
                            {move || selected.get().map(|f| f.name).unwrap_or_default()}
                        </span>
                        <span class="drop-zone__file-size">
                            {move || selected.get().map(|f| format!(" ({})", format_size(f.size))).unwrap_or_default()}
                        </span>
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// Keep the browser from opening the file and parents from seeing the event.
fn suppress(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[cfg(feature = "hydrate")]
fn dropped_files(ev: &DragEvent) -> Vec<PickedFile> {
    crate::util::file_read::files_of(ev.data_transfer().and_then(|dt| dt.files()))
}

#[cfg(not(feature = "hydrate"))]
fn dropped_files(_ev: &DragEvent) -> Vec<PickedFile> {
    Vec::new()
}

#[cfg(feature = "hydrate")]
fn picked_files(ev: &Event) -> Vec<PickedFile> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let files = crate::util::file_read::files_of(input.files());
    // Clear so picking the same file again still fires `change`.
    input.set_value("");
    files
}

#[cfg(not(feature = "hydrate"))]
fn picked_files(_ev: &Event) -> Vec<PickedFile> {
    Vec::new()
}
