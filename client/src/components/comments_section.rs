//! Scrollable comment list for one post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Comments arrive embedded in the post list; this section never fetches on
//! its own. Every mutation goes through the comment dialogs and then runs the
//! page-level `on_refresh`, which re-fetches the whole feed.

use contract::{Comment, CommentsView, EntityDialog, author_name};
use leptos::prelude::*;

use super::comment_dialogs::{CreateCommentDialog, DeleteCommentDialog, EditCommentDialog};
use super::overflow_menu::OverflowMenu;

#[component]
pub fn CommentsSection(post_id: i64, comments: Vec<Comment>, on_refresh: Callback<()>) -> impl IntoView {
    let dialog = RwSignal::new(EntityDialog::<Comment>::default());

    let rows = match CommentsView::of(&comments) {
        CommentsView::Empty(message) => view! { <p class="comments__empty">{message}</p> }.into_any(),
        CommentsView::Comments(list) => {
            let last = list.len().saturating_sub(1);
            list.iter()
                .cloned()
                .enumerate()
                .map(|(index, comment)| {
                    let separated = index < last;
                    view! { <CommentRow comment dialog separated/> }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="comments">
            <div class="comments__scroll">
                <div class="comments__toolbar">
                    <button
                        class="btn btn--ghost"
                        title="Add comment"
                        on:click=move |_| dialog.update(EntityDialog::open_create)
                    >
                        "+ Comment"
                    </button>
                </div>
                {rows}
            </div>
            <CreateCommentDialog post_id dialog on_refresh/>
            <EditCommentDialog post_id dialog on_refresh/>
            <DeleteCommentDialog post_id dialog on_refresh/>
        </div>
    }
}

#[component]
fn CommentRow(comment: Comment, dialog: RwSignal<EntityDialog<Comment>>, separated: bool) -> impl IntoView {
    let author = author_name(&comment).to_owned();
    let content = comment.content.clone();

    let on_edit = Callback::new({
        let comment = comment.clone();
        move |()| dialog.update(|d| d.open_edit(comment.clone()))
    });
    let on_delete = Callback::new(move |()| dialog.update(|d| d.open_delete(comment.clone())));

    view! {
        <div class="comment">
            <div class="comment__row">
                <p class="comment__text">
                    <span class="comment__author">{author}</span>
                    ": "
                    {content}
                </p>
                <OverflowMenu on_edit on_delete/>
            </div>
            <Show when=move || separated>
                <hr class="separator"/>
            </Show>
        </div>
    }
}
