//! The REST endpoint table.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::fmt;

/// HTTP verbs used by the blog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every call the front-end makes, keyed by the identifiers its path needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    ListPosts,
    CreatePost,
    EditPost { id: i64 },
    DeletePost { id: i64 },
    CreateComment { post_id: i64 },
    EditComment { post_id: i64, id: i64 },
    DeleteComment { id: i64 },
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::ListPosts => Method::Get,
            Self::Register | Self::Login | Self::CreatePost | Self::CreateComment { .. } => Method::Post,
            Self::EditPost { .. } | Self::EditComment { .. } => Method::Put,
            Self::DeletePost { .. } | Self::DeleteComment { .. } => Method::Delete,
        }
    }

    /// Path relative to the configured API base URL.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Register => "/register".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::ListPosts | Self::CreatePost => "/posts".to_owned(),
            Self::EditPost { id } | Self::DeletePost { id } => format!("/posts/{id}"),
            Self::CreateComment { post_id } => format!("/posts/{post_id}/comments"),
            Self::EditComment { post_id, id } => format!("/posts/{post_id}/comments/{id}"),
            Self::DeleteComment { id } => format!("/comments/{id}"),
        }
    }

    /// Whether the call carries the bearer token. Only mutations do.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::Register | Self::Login | Self::ListPosts)
    }
}

/// Join a base URL and an endpoint path without doubling slashes.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
