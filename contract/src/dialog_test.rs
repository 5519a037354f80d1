use super::*;
use crate::mutation::submit;
use crate::session::MemorySession;
use crate::test_helpers::{self, MockTransport};
use crate::toast::{Toast, ToastQueue};

// =============================================================
// DialogAction
// =============================================================

#[test]
fn closed_dialog_has_no_pending_call() {
    let dialog = EntityDialog::<Post>::default();
    assert!(!dialog.action().is_open());
    assert_eq!(dialog.pending(()), None);
}

#[test]
fn open_edit_populates_form_from_target() {
    let post = test_helpers::post(3, "Original", Vec::new());
    let mut dialog = EntityDialog::<Post>::default();
    dialog.open_edit(post.clone());
    assert_eq!(dialog.form(), &PostForm { title: "Original".to_owned(), content: "Original body".to_owned() });
    assert_eq!(dialog.action().editing(), Some(&post));
}

#[test]
fn switching_edit_target_repopulates_form() {
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_edit(test_helpers::comment(1, 1, "first"));
    dialog.form_mut().content = "scratch".to_owned();
    dialog.open_edit(test_helpers::comment(2, 1, "second"));
    assert_eq!(dialog.form().content, "second");
}

#[test]
fn pending_edit_uses_draft_not_original() {
    let mut dialog = EntityDialog::<Post>::default();
    dialog.open_edit(test_helpers::post(3, "Original", Vec::new()));
    dialog.form_mut().title = "Changed".to_owned();
    assert_eq!(
        dialog.pending(()),
        Some(Mutation::EditPost {
            id: 3,
            form: PostForm { title: "Changed".to_owned(), content: "Original body".to_owned() },
        })
    );
}

#[test]
fn pending_comment_create_targets_scope_post() {
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_create();
    dialog.form_mut().content = "hello".to_owned();
    assert_eq!(
        dialog.pending(42),
        Some(Mutation::CreateComment { post_id: 42, form: CommentForm { content: "hello".to_owned() } })
    );
}

#[test]
fn pending_delete_uses_target_id() {
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_delete(test_helpers::comment(5, 1, "bye"));
    assert_eq!(dialog.pending(1), Some(Mutation::DeleteComment { id: 5 }));
}

#[test]
fn cancel_discards_draft() {
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_create();
    dialog.form_mut().content = "half-written".to_owned();
    dialog.close();
    assert_eq!(dialog.action(), &DialogAction::Closed);
    assert_eq!(dialog.form(), &CommentForm::default());
}

// =============================================================
// Full cycle
// =============================================================

#[tokio::test]
async fn created_comment_refreshes_once_and_clears_content() {
    let transport = MockTransport::replying(201, r#"{"id":10,"content":"hello","post_id":42,"user_id":2}"#);
    let session = MemorySession::with_token("tok");
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_create();
    dialog.form_mut().content = "hello".to_owned();

    let submitted = dialog.action().clone();
    let mutation = dialog.pending(42).expect("dialog is open");
    let resolution = submit(&transport, &session, &mutation).await;

    let mut toasts = ToastQueue::default();
    let mut refreshed = 0;
    assert!(resolution.apply(&mut toasts, || refreshed += 1));
    assert!(dialog.settle(&submitted));

    assert_eq!(refreshed, 1);
    assert_eq!(dialog.form().content, "");
    assert!(!dialog.action().is_open());
    assert_eq!(toasts.toasts(), &[Toast::success("Comment created successfully.")]);
}

#[tokio::test]
async fn unauthorized_delete_leaves_list_untouched() {
    let mut posts = vec![test_helpers::post(1, "Keep", Vec::new())];
    let transport = MockTransport::replying(401, "{}");
    let mut dialog = EntityDialog::<Post>::default();
    dialog.open_delete(posts[0].clone());

    let submitted = dialog.action().clone();
    let mutation = dialog.pending(()).expect("dialog is open");
    let resolution = submit(&transport, &MemorySession::default(), &mutation).await;
    let mut toasts = ToastQueue::default();
    let succeeded = resolution.apply(&mut toasts, || posts.clear());
    dialog.settle(&submitted);

    assert!(!succeeded);
    assert_eq!(posts.len(), 1);
    assert_eq!(toasts.errors().collect::<Vec<_>>(), vec!["You are not authorized to perform this operation."]);
    assert!(!dialog.action().is_open());
}

#[tokio::test]
async fn validation_failure_closes_without_refresh() {
    let transport = MockTransport::replying(422, r#"{"content":["Content is required."]}"#);
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_edit(test_helpers::comment(1, 1, "old"));

    let submitted = dialog.action().clone();
    let mutation = dialog.pending(1).expect("dialog is open");
    let resolution = submit(&transport, &MemorySession::with_token("tok"), &mutation).await;
    let mut toasts = ToastQueue::default();
    let mut refreshed = false;
    resolution.apply(&mut toasts, || refreshed = true);
    dialog.settle(&submitted);

    assert!(!refreshed);
    assert_eq!(toasts.toasts(), &[Toast::error("Content is required.")]);
    assert!(!dialog.action().is_open());
}

#[tokio::test]
async fn late_response_leaves_reopened_dialog_alone() {
    let transport = MockTransport::replying(201, r#"{"id":7,"title":"New","content":"Body","user_id":1}"#);
    let mut dialog = EntityDialog::<Post>::default();
    dialog.open_create();
    dialog.form_mut().title = "New".to_owned();
    let submitted = dialog.action().clone();
    let mutation = dialog.pending(()).expect("dialog is open");

    // User cancels and starts editing another post before the create returns.
    dialog.close();
    dialog.open_edit(test_helpers::post(3, "Other", Vec::new()));
    dialog.form_mut().title = "Draft".to_owned();

    let resolution = submit(&transport, &MemorySession::with_token("tok"), &mutation).await;
    let mut toasts = ToastQueue::default();
    let mut refreshed = false;
    assert!(resolution.apply(&mut toasts, || refreshed = true));

    assert!(!dialog.settle(&submitted));
    assert!(refreshed);
    assert_eq!(toasts.toasts(), &[Toast::success("Post created successfully.")]);
    assert_eq!(dialog.action().editing().map(|p| p.id), Some(3));
    assert_eq!(dialog.form().title, "Draft");
}

#[test]
fn settle_closes_matching_edit() {
    let target = test_helpers::comment(4, 1, "text");
    let mut dialog = EntityDialog::<Comment>::default();
    dialog.open_edit(target.clone());
    dialog.form_mut().content = "typed while waiting".to_owned();

    assert!(dialog.settle(&DialogAction::Editing(target)));
    assert_eq!(dialog.action(), &DialogAction::Closed);
    assert_eq!(dialog.form(), &CommentForm::default());
}
