//! Headless front-end core for the postboard blog.
//!
//! This crate owns everything the browser UI and the CLI share: the DTOs
//! mirrored from the remote REST API, the endpoint table, the single request
//! helper with its discriminated outcome, toasts, the session-token seam, and
//! the view state behind the post list and the six entity dialogs.
//!
//! ARCHITECTURE
//! ============
//! Surfaces plug in two things: an [`ApiTransport`] (how bytes reach the API)
//! and a [`SessionStore`] (where the bearer token lives). Every mutation then
//! follows the same cycle: [`Mutation::request`] -> [`execute`] ->
//! [`Resolution`] -> toasts + optional refresh.

pub mod auth;
pub mod dialog;
pub mod endpoint;
pub mod feed;
pub mod model;
pub mod mutation;
pub mod outcome;
pub mod session;
pub mod toast;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use auth::{AuthFlow, login, register};
pub use dialog::{DialogAction, Editable, EntityDialog};
pub use endpoint::{Endpoint, Method};
pub use feed::{CommentsView, ExpandedPosts, FeedView, PostsFeed, author_name};
pub use model::{Comment, CommentForm, Credentials, LoginResponse, Post, PostForm, Registration, User};
pub use mutation::{ActionMessages, Mutation, Resolution, submit};
pub use outcome::{ApiError, ApiOutcome, ValidationErrors};
pub use session::{MemorySession, SESSION_TOKEN_KEY, SessionError, SessionStore};
pub use toast::{Toast, ToastLevel, ToastQueue, ToastSink, UNEXPECTED_ERROR};
pub use transport::{ApiRequest, ApiTransport, RawResponse, execute};
