use super::*;

#[test]
fn upload_step_highlights_first_badge() {
    let (upload, send) = step_classes(Step::Upload);
    assert!(upload.contains("step--active"));
    assert!(send.contains("step--pending"));
}

#[test]
fn send_step_marks_upload_done() {
    let (upload, send) = step_classes(Step::Send);
    assert!(upload.contains("step--done"));
    assert!(send.contains("step--active"));
}
