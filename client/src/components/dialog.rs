//! Shared dialog chrome and the confirm handler every entity dialog uses.
//!
//! DESIGN
//! ======
//! The six post/comment dialogs differ only in copy and fields. The
//! backdrop/card layout lives in [`DialogFrame`]; the request cycle
//! (send, toast, refresh on success, close) lives in [`confirm_dialog`],
//! which drives the headless [`EntityDialog`] from `contract`.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use contract::{DialogAction, Editable, EntityDialog, Resolution, ToastSink, submit};
use leptos::prelude::*;

use crate::net::api::ApiContext;
use crate::state::toast::ToastState;

/// Backdrop + card with a title and description. Clicking the backdrop
/// cancels; clicks inside the card do not propagate.
#[component]
pub fn DialogFrame(
    title: &'static str,
    description: &'static str,
    on_cancel: Callback<()>,
    #[prop(optional)] danger: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__description" class:dialog__danger=danger>
                    {description}
                </p>
                {children()}
            </div>
        </div>
    }
}

/// Cancel + confirm button row.
#[component]
pub fn DialogActions(
    cancel_label: &'static str,
    confirm_label: &'static str,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let primary = !danger;
    view! {
        <div class="dialog__actions">
            <button class="btn" on:click=move |_| on_cancel.run(())>
                {cancel_label}
            </button>
            <button
                class="btn"
                class:btn--primary=primary
                class:btn--danger=danger
                on:click=move |_| on_confirm.run(())
            >
                {confirm_label}
            </button>
        </div>
    }
}

/// Send the dialog's pending call, then toast, refresh on success and close.
///
/// Ignored when the dialog is closed. Repeated clicks each send a request.
/// Toasts and refresh run even if the dialog's owner was disposed while the
/// call was in flight; the dialog only closes if it still shows the action
/// that was submitted.
pub fn confirm_dialog<T>(
    api: ApiContext,
    toasts: RwSignal<ToastState>,
    dialog: RwSignal<EntityDialog<T>>,
    scope: T::Scope,
    on_refresh: Callback<()>,
) where
    T: Editable + Send + Sync + 'static,
    T::Form: Send + Sync + 'static,
{
    let Some((mutation, submitted)) =
        dialog.with_untracked(|d| d.pending(scope).map(|mutation| (mutation, d.action().clone())))
    else {
        return;
    };

    leptos::task::spawn_local(async move {
        let resolution = submit(&api.transport, &api.session, &mutation).await;
        resolve_dialog(resolution, &submitted, toasts, dialog, on_refresh);
    });
}

/// Completion half of [`confirm_dialog`]. Returns whether the call succeeded.
pub(crate) fn resolve_dialog<T>(
    resolution: Resolution,
    submitted: &DialogAction<T>,
    toasts: RwSignal<ToastState>,
    dialog: RwSignal<EntityDialog<T>>,
    on_refresh: Callback<()>,
) -> bool
where
    T: Editable + Send + Sync + 'static,
    T::Form: Send + Sync + 'static,
{
    let mut raised = Vec::new();
    let succeeded = resolution.apply(&mut raised, || on_refresh.run(()));
    toasts.update(|t| t.push_all(raised));
    // A comment section can be collapsed mid-request, taking its dialog with it.
    dialog.try_update(|d| d.settle(submitted));
    succeeded
}
