//! Post feed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-level [`PostsFeed`], the expand/collapse map and the post
//! dialog state. The feed is fetched on mount and re-fetched each time a
//! dialog reports success through `on_refresh`.
//!
//! DESIGN
//! ======
//! Refresh is a revision bump: `on_refresh` calls [`PostsFeed::invalidate`],
//! a memo tracks the revision, and an effect re-runs the list request. The
//! previous posts stay on screen until the new response lands. Cards are
//! keyed by their content, so a refresh only rebuilds posts that changed.

use contract::{EntityDialog, ExpandedPosts, FeedView, Post, PostsFeed, ToastSink, execute};
use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_dialogs::{CreatePostDialog, DeletePostDialog, EditPostDialog};
use crate::net::api::ApiContext;
use crate::state::toast::ToastState;

#[component]
pub fn PostsPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let feed = RwSignal::new(PostsFeed::default());
    let expanded = RwSignal::new(ExpandedPosts::default());
    let dialog = RwSignal::new(EntityDialog::<Post>::default());

    let revision = Memo::new(move |_| feed.with(PostsFeed::revision));
    Effect::new(move || {
        let revision = revision.get();
        leptos::task::spawn_local(async move {
            let outcome = execute(&api.transport, &PostsFeed::request()).await;
            let mut raised = Vec::new();
            feed.update(|f| {
                f.apply_at(revision, outcome, &mut raised);
            });
            toasts.update(|t| t.push_all(raised));
        });
    });

    let skeletons = Memo::new(move |_| {
        feed.with(|f| match f.view() {
            FeedView::Loading { skeletons } => skeletons,
            _ => 0,
        })
    });
    let empty = Memo::new(move |_| {
        feed.with(|f| match f.view() {
            FeedView::Empty(message) => Some(message),
            _ => None,
        })
    });
    let posts = Memo::new(move |_| feed.with(|f| f.posts().to_vec()));

    let on_refresh = Callback::new(move |()| feed.update(PostsFeed::invalidate));

    view! {
        <div class="posts-page">
            <div class="posts-page__toolbar">
                <button class="btn btn--primary" on:click=move |_| dialog.update(EntityDialog::open_create)>
                    "Create Post"
                </button>
            </div>

            {move || {
                (0..skeletons.get())
                    .map(|_| view! { <div class="skeleton post-card--skeleton"></div> })
                    .collect_view()
            }}
            {move || empty.get().map(|message| view! { <p class="posts-page__empty">{message}</p> })}
            <For
                each=move || posts.get()
                key=|post| post.clone()
                children=move |post| view! { <PostCard post expanded dialog on_refresh/> }
            />

            <CreatePostDialog dialog on_refresh/>
            <EditPostDialog dialog on_refresh/>
            <DeletePostDialog dialog on_refresh/>
        </div>
    }
}
