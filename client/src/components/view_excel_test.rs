use super::*;

#[test]
fn empty_and_ready_have_no_status() {
    assert_eq!(status_message(&PreviewState::Empty), None);
    let mut state = crate::state::upload::UploadState::default();
    let id = state.select("a.xlsx", 1);
    state.finish_decode(id, Ok::<_, workbook::DecodeError>(ParsedTable::default()));
    assert_eq!(status_message(&state.preview), None);
}

#[test]
fn loading_has_reading_line() {
    let mut state = crate::state::upload::UploadState::default();
    state.select("a.xlsx", 1);
    assert_eq!(status_message(&state.preview).as_deref(), Some("Dosya okunuyor..."));
}

#[test]
fn failure_surfaces_reason() {
    let mut state = crate::state::upload::UploadState::default();
    let id = state.select("a.bin", 1);
    state.finish_decode(id, Err::<ParsedTable, _>("workbook contains no sheets"));
    assert_eq!(
        status_message(&state.preview).as_deref(),
        Some("Dosya okunamadı: workbook contains no sheets")
    );
}
