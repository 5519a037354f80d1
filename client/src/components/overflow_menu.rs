//! Kebab menu offering Edit and Delete for a post or comment.

use leptos::prelude::*;

#[component]
pub fn OverflowMenu(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="menu">
            <button
                class="btn btn--ghost menu__trigger"
                aria-label="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div class="menu__content">
                    <button
                        class="menu__item"
                        on:click=move |_| {
                            open.set(false);
                            on_edit.run(());
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="menu__item menu__item--danger"
                        on:click=move |_| {
                            open.set(false);
                            on_delete.run(());
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
