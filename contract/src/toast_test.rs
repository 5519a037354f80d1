use super::*;

#[test]
fn queue_keeps_push_order() {
    let mut queue = ToastQueue::default();
    queue.push(Toast::error("first"));
    queue.push(Toast::success("second"));
    assert_eq!(queue.toasts(), &[Toast::error("first"), Toast::success("second")]);
}

#[test]
fn errors_filters_success_toasts() {
    let mut queue = ToastQueue::default();
    queue.push_all([Toast::success("ok"), Toast::error("bad")]);
    assert_eq!(queue.errors().collect::<Vec<_>>(), vec!["bad"]);
}

#[test]
fn drain_empties_queue() {
    let mut queue = ToastQueue::default();
    queue.push(Toast::error("x"));
    assert_eq!(queue.drain().len(), 1);
    assert!(queue.toasts().is_empty());
}
