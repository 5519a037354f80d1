//! One post in the feed: title, content, actions and the comment toggle.

use contract::{EntityDialog, ExpandedPosts, Post};
use leptos::prelude::*;

use super::comments_section::CommentsSection;
use super::overflow_menu::OverflowMenu;

#[component]
pub fn PostCard(
    post: Post,
    expanded: RwSignal<ExpandedPosts>,
    dialog: RwSignal<EntityDialog<Post>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let post_id = post.id;
    let comments = post.comments.clone();

    let on_edit = Callback::new({
        let post = post.clone();
        move |()| dialog.update(|d| d.open_edit(post.clone()))
    });
    let on_delete = Callback::new({
        let post = post.clone();
        move |()| dialog.update(|d| d.open_delete(post.clone()))
    });

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <h2 class="post-card__title">{post.title}</h2>
                <OverflowMenu on_edit on_delete/>
            </header>
            <p class="post-card__content">{post.content}</p>
            <button
                class="btn btn--ghost post-card__toggle"
                on:click=move |_| {
                    expanded.update(|e| {
                        e.toggle(post_id);
                    });
                }
            >
                {move || expanded.with(|e| e.toggle_label(post_id))}
            </button>
            <Show when=move || expanded.with(|e| e.is_expanded(post_id))>
                <CommentsSection post_id comments=comments.clone() on_refresh/>
            </Show>
        </article>
    }
}
