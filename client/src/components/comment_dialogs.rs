//! Create, edit and delete dialogs for comments on one post.
//!
//! Each comments section owns one [`EntityDialog<Comment>`] shared by all
//! three dialogs. `post_id` scopes the create call; edit and delete address
//! the selected comment directly.

use contract::{Comment, EntityDialog};
use leptos::prelude::*;

use super::dialog::{DialogActions, DialogFrame, confirm_dialog};
use crate::net::api::ApiContext;
use crate::state::toast::ToastState;

#[component]
fn CommentField(dialog: RwSignal<EntityDialog<Comment>>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="dialog__fields">
            <textarea
                class="dialog__textarea"
                placeholder=placeholder
                prop:value=move || dialog.with(|d| d.form().content.clone())
                on:input=move |ev| {
                    let content = event_target_value(&ev);
                    dialog.update(|d| d.form_mut().content = content);
                }
            ></textarea>
        </div>
    }
}

/// New comment on `post_id`.
#[component]
pub fn CreateCommentDialog(
    post_id: i64,
    dialog: RwSignal<EntityDialog<Comment>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, post_id, on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().is_creating())>
            <DialogFrame
                title="Create Comment"
                description="Write the content of your comment below."
                on_cancel=on_cancel
            >
                <CommentField dialog placeholder="Comment content"/>
                <DialogActions
                    cancel_label="Cancel"
                    confirm_label="Confirm"
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                />
            </DialogFrame>
        </Show>
    }
}

#[component]
pub fn EditCommentDialog(
    post_id: i64,
    dialog: RwSignal<EntityDialog<Comment>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, post_id, on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().editing().is_some())>
            <DialogFrame
                title="Edit Comment"
                description="Modify the content of your comment."
                on_cancel=on_cancel
            >
                <CommentField dialog placeholder="Content"/>
                <DialogActions
                    cancel_label="Cancel"
                    confirm_label="Save Changes"
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                />
            </DialogFrame>
        </Show>
    }
}

#[component]
pub fn DeleteCommentDialog(
    post_id: i64,
    dialog: RwSignal<EntityDialog<Comment>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, post_id, on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().deleting().is_some())>
            <DialogFrame
                title="Delete Comment"
                description="Are you sure you want to delete this comment? This cannot be undone."
                on_cancel=on_cancel
                danger=true
            >
                <DialogActions
                    cancel_label="Cancel"
                    confirm_label="Delete"
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                    danger=true
                />
            </DialogFrame>
        </Show>
    }
}
