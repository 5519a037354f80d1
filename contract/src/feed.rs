//! Post listing state: fetch lifecycle, expand/collapse map, comment rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The posts page owns one [`PostsFeed`]. It is fetched on mount and again
//! whenever [`PostsFeed::invalidate`] bumps the revision, which is the
//! refresh callback handed to every dialog. Comments arrive embedded in
//! each post, so expanding a post never touches the network.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::HashMap;

use crate::endpoint::Endpoint;
use crate::model::{Comment, Post};
use crate::mutation::{ActionMessages, Resolution};
use crate::outcome::ApiOutcome;
use crate::toast::ToastSink;
use crate::transport::{ApiRequest, ApiTransport, execute};

/// Placeholder blocks shown before the first response.
pub const SKELETON_COUNT: usize = 4;
pub const NO_POSTS: &str = "No posts available.";
pub const NO_COMMENTS: &str = "No comments yet.";
/// Author label for comments without an embedded user.
pub const ANONYMOUS_AUTHOR: &str = "User";

const LIST_MESSAGES: ActionMessages = ActionMessages {
    success: None,
    unauthorized: None,
    fallback: "Error fetching posts.",
};

/// What the posts page should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedView<'a> {
    Loading { skeletons: usize },
    Empty(&'static str),
    Posts(&'a [Post]),
}

/// Fetched posts plus the revision that drives re-fetching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsFeed {
    posts: Vec<Post>,
    loaded: bool,
    revision: u64,
}

impl PostsFeed {
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Bumped on every invalidation; watchers re-fetch when it changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn view(&self) -> FeedView<'_> {
        if !self.loaded {
            FeedView::Loading { skeletons: SKELETON_COUNT }
        } else if self.posts.is_empty() {
            FeedView::Empty(NO_POSTS)
        } else {
            FeedView::Posts(&self.posts)
        }
    }

    /// Mark the listing stale.
    pub fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    #[must_use]
    pub fn request() -> ApiRequest {
        ApiRequest::new(Endpoint::ListPosts)
    }

    /// Store a list response. Failures keep the previous posts and surface toasts.
    pub fn apply<K: ToastSink>(&mut self, outcome: ApiOutcome<Vec<Post>>, sink: &mut K) {
        let resolution = Resolution::from_outcome(&outcome, &LIST_MESSAGES);
        if let ApiOutcome::Success(posts) = outcome {
            self.posts = posts;
        }
        sink.push_all(resolution.toasts);
        self.loaded = true;
    }

    /// Store a response fetched at `revision`, unless a newer refresh has
    /// started since. Returns whether the response was applied.
    pub fn apply_at<K: ToastSink>(&mut self, revision: u64, outcome: ApiOutcome<Vec<Post>>, sink: &mut K) -> bool {
        if revision != self.revision {
            tracing::debug!(revision, current = self.revision, "dropping stale post listing");
            return false;
        }
        self.apply(outcome, sink);
        true
    }

    /// Fetch and apply in one step.
    pub async fn load<Tr, K>(&mut self, transport: &Tr, sink: &mut K)
    where
        Tr: ApiTransport + ?Sized,
        K: ToastSink,
    {
        let outcome = execute(transport, &Self::request()).await;
        self.apply(outcome, sink);
    }
}

/// Per-post expanded/collapsed flags. Unknown posts are collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedPosts {
    expanded: HashMap<i64, bool>,
}

impl ExpandedPosts {
    #[must_use]
    pub fn is_expanded(&self, post_id: i64) -> bool {
        self.expanded.get(&post_id).copied().unwrap_or(false)
    }

    /// Flip one post and return its new state.
    pub fn toggle(&mut self, post_id: i64) -> bool {
        let entry = self.expanded.entry(post_id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    #[must_use]
    pub fn toggle_label(&self, post_id: i64) -> &'static str {
        if self.is_expanded(post_id) { "Hide Comments ↑" } else { "Show Comments ↓" }
    }
}

/// What a comments section should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentsView<'a> {
    Empty(&'static str),
    Comments(&'a [Comment]),
}

impl<'a> CommentsView<'a> {
    #[must_use]
    pub fn of(comments: &'a [Comment]) -> Self {
        if comments.is_empty() { Self::Empty(NO_COMMENTS) } else { Self::Comments(comments) }
    }
}

/// Display name for a comment's author.
#[must_use]
pub fn author_name(comment: &Comment) -> &str {
    comment.user.as_ref().map_or(ANONYMOUS_AUTHOR, |user| user.name.as_str())
}
