//! Terminal rendering of toasts and listings.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::fmt::Write as _;

use contract::{Comment, CommentsView, FeedView, Post, PostsFeed, Toast, ToastLevel, ToastSink, author_name};

/// Everything one command wants shown, plus whether it succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub toasts: Vec<Toast>,
    pub listing: Option<String>,
    pub succeeded: bool,
}

impl Report {
    pub fn new(succeeded: bool) -> Self {
        Self { succeeded, ..Self::default() }
    }

    #[must_use]
    pub fn with_listing(mut self, listing: String) -> Self {
        self.listing = Some(listing);
        self
    }

    /// Success toasts and listings go to stdout, error toasts to stderr.
    pub fn print(self) -> bool {
        for toast in &self.toasts {
            match toast.level {
                ToastLevel::Success => println!("{}", toast.message),
                ToastLevel::Error => eprintln!("{}", toast.message),
            }
        }
        if let Some(listing) = &self.listing {
            println!("{listing}");
        }
        self.succeeded
    }
}

impl ToastSink for Report {
    fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

pub fn render_feed(feed: &PostsFeed) -> String {
    match feed.view() {
        FeedView::Loading { .. } => String::new(),
        FeedView::Empty(message) => message.to_owned(),
        FeedView::Posts(posts) => posts.iter().map(render_post).collect::<Vec<_>>().join("\n\n"),
    }
}

fn render_post(post: &Post) -> String {
    let mut out = format!("#{} {}\n  by {}\n  {}", post.id, post.title, post.user.name, post.content);
    let count = post.comments.len();
    let noun = if count == 1 { "comment" } else { "comments" };
    let _ = write!(out, "\n  {count} {noun}");
    out
}

pub fn render_comments(comments: &[Comment]) -> String {
    match CommentsView::of(comments) {
        CommentsView::Empty(message) => message.to_owned(),
        CommentsView::Comments(list) => list
            .iter()
            .map(|comment| format!("#{} {}: {}", comment.id, author_name(comment), comment.content))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
