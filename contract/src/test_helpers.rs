//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::model::{Comment, Post, User};
use crate::outcome::ApiError;
use crate::transport::{ApiRequest, ApiTransport, RawResponse};

/// Scripted transport that records every request it receives.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<RawResponse, ApiError>>) -> Self {
        Self { responses: Mutex::new(responses.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(RawResponse::new(status, body))])
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(ApiError::Network(message.to_owned()))])
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl ApiTransport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

pub fn user(id: i64, name: &str) -> User {
    User { id, name: name.to_owned(), email: format!("{}@example.com", name.to_ascii_lowercase()) }
}

pub fn comment(id: i64, post_id: i64, content: &str) -> Comment {
    Comment { id, content: content.to_owned(), post_id, user_id: 2, user: Some(user(2, "Grace")) }
}

pub fn post(id: i64, title: &str, comments: Vec<Comment>) -> Post {
    Post {
        id,
        title: title.to_owned(),
        content: format!("{title} body"),
        user: user(1, "Ada"),
        comments,
    }
}
