//! Global toast surface.
//!
//! Toasts dismiss themselves after [`TOAST_TTL_MS`] or on click.

use leptos::prelude::*;

use crate::state::toast::{ToastItem, ToastState, toast_class};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

#[component]
pub fn Toaster(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items().to_vec())
                key=|item| item.id
                children=move |item| view! { <ToastCard item toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(item: ToastItem, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = item.id;
    let class = toast_class(&item.toast);
    let message = item.toast.message;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });

    view! {
        <div
            class=class
            role="status"
            on:click=move |_| toasts.update(|t| t.dismiss(id))
        >
            {message}
        </div>
    }
}
