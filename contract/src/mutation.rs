//! The request/response/toast/refresh cycle shared by all six entity dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! A dialog turns its draft into a [`Mutation`], [`submit`] sends it with the
//! bearer token read from the session store at that moment, and the
//! [`Resolution`] says which toasts to show and whether the caller's refresh
//! callback should run. Only a 2xx triggers a refresh; every other outcome
//! leaves the caller's data untouched.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use serde_json::{Value, json};

use crate::endpoint::Endpoint;
use crate::model::{CommentForm, PostForm};
use crate::outcome::ApiOutcome;
use crate::session::SessionStore;
use crate::toast::{Toast, ToastSink, UNEXPECTED_ERROR};
use crate::transport::{ApiRequest, ApiTransport, execute};

const POST_NOT_AUTHORIZED: &str = "You are not authorized to perform this operation.";

/// Toast copy for one kind of call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMessages {
    /// Shown on 2xx. `None` for silent fetches.
    pub success: Option<&'static str>,
    /// Fixed 401/403 message. `None` treats 401/403 like any other failure.
    pub unauthorized: Option<&'static str>,
    /// Used when a failure carries no server message.
    pub fallback: &'static str,
}

/// One mutating call against a post or comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    CreatePost(PostForm),
    EditPost { id: i64, form: PostForm },
    DeletePost { id: i64 },
    CreateComment { post_id: i64, form: CommentForm },
    EditComment { post_id: i64, id: i64, form: CommentForm },
    DeleteComment { id: i64 },
}

impl Mutation {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::CreatePost(_) => Endpoint::CreatePost,
            Self::EditPost { id, .. } => Endpoint::EditPost { id: *id },
            Self::DeletePost { id } => Endpoint::DeletePost { id: *id },
            Self::CreateComment { post_id, .. } => Endpoint::CreateComment { post_id: *post_id },
            Self::EditComment { post_id, id, .. } => Endpoint::EditComment { post_id: *post_id, id: *id },
            Self::DeleteComment { id } => Endpoint::DeleteComment { id: *id },
        }
    }

    /// JSON body; deletes send none.
    #[must_use]
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::CreatePost(form) | Self::EditPost { form, .. } => {
                Some(json!({ "title": form.title, "content": form.content }))
            }
            Self::CreateComment { form, .. } | Self::EditComment { form, .. } => {
                Some(json!({ "content": form.content }))
            }
            Self::DeletePost { .. } | Self::DeleteComment { .. } => None,
        }
    }

    #[must_use]
    pub fn messages(&self) -> ActionMessages {
        let (success, unauthorized, fallback) = match self {
            Self::CreatePost(_) => ("Post created successfully.", POST_NOT_AUTHORIZED, "Failed to create post."),
            Self::EditPost { .. } => ("Post updated successfully.", POST_NOT_AUTHORIZED, "Failed to update post."),
            Self::DeletePost { .. } => ("Post deleted successfully.", POST_NOT_AUTHORIZED, "Failed to delete post."),
            Self::CreateComment { .. } => (
                "Comment created successfully.",
                "You are not authorized to create comments.",
                "Failed to create comment.",
            ),
            Self::EditComment { .. } => (
                "Comment updated successfully.",
                "You are not authorized to edit this comment.",
                "Failed to edit comment.",
            ),
            Self::DeleteComment { .. } => (
                "Comment deleted successfully.",
                "You are not authorized to delete this comment.",
                "Failed to delete comment.",
            ),
        };
        ActionMessages { success: Some(success), unauthorized: Some(unauthorized), fallback }
    }

    /// Build the request, reading the token from `session` now.
    pub fn request<S: SessionStore + ?Sized>(&self, session: &S) -> ApiRequest {
        let request = ApiRequest::new(self.endpoint()).with_bearer(session.token());
        match self.body() {
            Some(body) => request.with_body(body),
            None => request,
        }
    }
}

/// What the UI must do once a call has completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub toasts: Vec<Toast>,
    pub succeeded: bool,
}

impl Resolution {
    /// Map an outcome onto toasts using `messages` for the fixed copy.
    pub fn from_outcome<T>(outcome: &ApiOutcome<T>, messages: &ActionMessages) -> Self {
        let failed = |toasts: Vec<Toast>| Self { toasts, succeeded: false };
        match outcome {
            ApiOutcome::Success(_) => Self {
                toasts: messages.success.map(Toast::success).into_iter().collect(),
                succeeded: true,
            },
            ApiOutcome::Validation(errors) => failed(errors.messages().map(Toast::error).collect()),
            ApiOutcome::Unauthorized { message, .. } => {
                let text = match messages.unauthorized {
                    Some(fixed) => fixed,
                    None => message.as_deref().unwrap_or(messages.fallback),
                };
                failed(vec![Toast::error(text)])
            }
            ApiOutcome::Failed { message, .. } => {
                failed(vec![Toast::error(message.as_deref().unwrap_or(messages.fallback))])
            }
            ApiOutcome::Transport(_) => failed(vec![Toast::error(UNEXPECTED_ERROR)]),
        }
    }

    /// Surface the toasts and run `refresh` on success. Returns whether the
    /// call succeeded.
    pub fn apply<K: ToastSink>(self, sink: &mut K, refresh: impl FnOnce()) -> bool {
        sink.push_all(self.toasts);
        if self.succeeded {
            refresh();
        }
        self.succeeded
    }
}

/// Send `mutation` and resolve its outcome.
pub async fn submit<Tr, S>(transport: &Tr, session: &S, mutation: &Mutation) -> Resolution
where
    Tr: ApiTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let request = mutation.request(session);
    let outcome: ApiOutcome<Value> = execute(transport, &request).await;
    Resolution::from_outcome(&outcome, &mutation.messages())
}
