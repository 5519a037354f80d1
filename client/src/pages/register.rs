//! Account registration page. Success navigates to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use contract::{Registration, ToastSink};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiContext;
use crate::state::toast::ToastState;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Registering..." } else { "Register" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let other_page = contract::auth::LOGIN_ROUTE;
    let form = RwSignal::new(Registration::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let registration = form.get_untracked();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let flow = contract::register(&api.transport, &registration).await;
            let mut raised = Vec::new();
            let next = flow.apply(&mut raised);
            toasts.update(|t| t.push_all(raised));
            busy.set(false);
            if let Some(route) = next {
                navigate(route, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="name">"Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            form.update(|f| f.name = name);
                        }
                    />
                    <label class="auth-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="youremail@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let email = event_target_value(&ev);
                            form.update(|f| f.email = email);
                        }
                    />
                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let password = event_target_value(&ev);
                            form.update(|f| f.password = password);
                        }
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=other_page>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
