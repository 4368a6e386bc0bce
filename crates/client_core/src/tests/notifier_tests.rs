use std::sync::Arc;

use super::*;

#[test]
fn renders_title_body_and_severity_classes() {
    let toast = ToastWidget::with_classes(["toast", "align-items-center"]);
    toast.notify("Thành công", "Cập nhật sản phẩm thành công", Severity::Success);

    let state = toast.snapshot();
    assert_eq!(state.title, "Thành công");
    assert_eq!(state.body, "Cập nhật sản phẩm thành công");
    assert_eq!(
        state.classes,
        vec!["toast", "align-items-center", "bg-success", "text-white"]
    );
    assert_eq!(state.shows, 1);
}

#[test]
fn second_call_replaces_previous_severity_styling() {
    let toast = ToastWidget::new();
    toast.notify("Lỗi", "first", Severity::Warning);
    toast.notify("Thành công", "second", Severity::Success);

    let state = toast.snapshot();
    assert!(!state.has_class("bg-warning"));
    assert!(!state.has_class("text-dark"));
    assert_eq!(state.classes, vec!["bg-success", "text-white"]);
    assert_eq!(state.body, "second");
    assert_eq!(state.shows, 2);
}

#[test]
fn each_severity_maps_to_one_style() {
    let cases = [
        (Severity::Success, ["bg-success", "text-white"]),
        (Severity::Error, ["bg-danger", "text-white"]),
        (Severity::Warning, ["bg-warning", "text-dark"]),
        (Severity::Info, ["bg-info", "text-white"]),
    ];
    for (severity, expected) in cases {
        let toast = ToastWidget::new();
        toast.notify("t", "m", Severity::Error);
        toast.notify("t", "m", severity);
        assert_eq!(toast.snapshot().classes, expected.to_vec());
    }
}

#[test]
fn unrecognized_severity_name_renders_as_info() {
    let toast = ToastWidget::new();
    toast.notify("t", "m", Severity::from_name("critical"));
    assert_eq!(toast.snapshot().classes, vec!["bg-info", "text-white"]);
}

#[test]
fn shared_widget_is_reachable_through_arc() {
    let toast = Arc::new(ToastWidget::new());
    let notifier: Arc<dyn Notifier> = toast.clone();
    notifier.notify("t", "m", Severity::Info);
    assert_eq!(toast.snapshot().shows, 1);
}
