use contract::{Comment, Toast};

use super::*;

fn resolution(succeeded: bool, message: &str) -> Resolution {
    let toast = if succeeded { Toast::success(message) } else { Toast::error(message) };
    Resolution { toasts: vec![toast], succeeded }
}

#[test]
fn resolve_after_section_disposed_still_toasts_and_refreshes() {
    let root = Owner::new();
    root.set();
    let toasts = RwSignal::new(ToastState::default());
    let refreshed = RwSignal::new(0);
    let on_refresh = Callback::new(move |()| refreshed.update(|n| *n += 1));

    // The comment section owns its dialog; hiding comments disposes it.
    let section = root.child();
    let dialog = section.with(|| RwSignal::new(EntityDialog::<Comment>::default()));
    dialog.update(EntityDialog::open_create);
    let submitted = dialog.with_untracked(|d| d.action().clone());
    section.cleanup();

    assert!(resolve_dialog(resolution(true, "Comment created successfully."), &submitted, toasts, dialog, on_refresh));
    assert_eq!(refreshed.get_untracked(), 1);
    assert_eq!(
        toasts.with_untracked(|t| t.items().iter().map(|i| i.toast.clone()).collect::<Vec<_>>()),
        vec![Toast::success("Comment created successfully.")]
    );
}

#[test]
fn resolve_closes_live_dialog_without_refresh_on_failure() {
    let root = Owner::new();
    root.set();
    let toasts = RwSignal::new(ToastState::default());
    let refreshed = RwSignal::new(0);
    let on_refresh = Callback::new(move |()| refreshed.update(|n| *n += 1));
    let dialog = RwSignal::new(EntityDialog::<Comment>::default());
    dialog.update(|d| d.open_delete(Comment { id: 1, content: "x".to_owned(), post_id: 1, user_id: 1, user: None }));
    let submitted = dialog.with_untracked(|d| d.action().clone());

    assert!(!resolve_dialog(resolution(false, "Failed to delete comment."), &submitted, toasts, dialog, on_refresh));
    assert_eq!(refreshed.get_untracked(), 0);
    assert!(!dialog.with_untracked(|d| d.action().is_open()));
    assert_eq!(toasts.with_untracked(|t| t.items().len()), 1);
}
