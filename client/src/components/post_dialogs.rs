//! Create, edit and delete dialogs for posts.
//!
//! All three share one [`EntityDialog<Post>`] owned by the posts page, so at
//! most one post dialog is open at a time.

use contract::{EntityDialog, Post};
use leptos::prelude::*;

use super::dialog::{DialogActions, DialogFrame, confirm_dialog};
use crate::net::api::ApiContext;
use crate::state::toast::ToastState;

/// Title input + content textarea bound to the dialog draft.
#[component]
fn PostFields(dialog: RwSignal<EntityDialog<Post>>) -> impl IntoView {
    view! {
        <div class="dialog__fields">
            <input
                class="dialog__input"
                type="text"
                placeholder="Title"
                prop:value=move || dialog.with(|d| d.form().title.clone())
                on:input=move |ev| {
                    let title = event_target_value(&ev);
                    dialog.update(|d| d.form_mut().title = title);
                }
            />
            <textarea
                class="dialog__textarea"
                placeholder="Content"
                prop:value=move || dialog.with(|d| d.form().content.clone())
                on:input=move |ev| {
                    let content = event_target_value(&ev);
                    dialog.update(|d| d.form_mut().content = content);
                }
            ></textarea>
        </div>
    }
}

#[component]
pub fn CreatePostDialog(dialog: RwSignal<EntityDialog<Post>>, on_refresh: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, (), on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().is_creating())>
            <DialogFrame
                title="Create Post"
                description="Enter the post title and content below."
                on_cancel=on_cancel
            >
                <PostFields dialog/>
                <DialogActions
                    cancel_label="Leave & Discard"
                    confirm_label="Confirm"
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                />
            </DialogFrame>
        </Show>
    }
}

#[component]
pub fn EditPostDialog(dialog: RwSignal<EntityDialog<Post>>, on_refresh: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, (), on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().editing().is_some())>
            <DialogFrame
                title="Edit Post"
                description="Modify the title and content of your post."
                on_cancel=on_cancel
            >
                <PostFields dialog/>
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
pub fn DeletePostDialog(dialog: RwSignal<EntityDialog<Post>>, on_refresh: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = Callback::new(move |()| dialog.update(EntityDialog::close));
    let on_confirm = Callback::new(move |()| confirm_dialog(api, toasts, dialog, (), on_refresh));

    view! {
        <Show when=move || dialog.with(|d| d.action().deleting().is_some())>
            <DialogFrame
                title="Confirm Delete"
                description="Are you sure you want to delete this post? This action cannot be undone."
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

