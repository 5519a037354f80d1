//! DTOs mirrored from the remote blog API.
//!
//! DESIGN
//! ======
//! These are plain wire shapes. Nothing here is validated client-side; the
//! API is the source of truth and answers 422 when a payload is rejected.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A registered user as embedded in posts and comments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A blog post with its author and embedded comments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user: User,
    /// Comments in server order. Absent or `null` on the wire reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

/// A comment attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub user_id: i64,
    /// Author, when the API embeds it.
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of a successful `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Draft for creating or editing a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

impl From<&Post> for PostForm {
    fn from(post: &Post) -> Self {
        Self { title: post.title.clone(), content: post.content.clone() }
    }
}

/// Draft for creating or editing a comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    pub content: String,
}

impl From<&Comment> for CommentForm {
    fn from(comment: &Comment) -> Self {
        Self { content: comment.content.clone() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Comment>>::deserialize(deserializer)?.unwrap_or_default())
}
