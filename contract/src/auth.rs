//! Login and registration flows.
//!
//! Both pages post one form and follow the shared toast rules. There is no
//! fixed "not authorized" copy here: a 401 from `/login` is reported with the
//! server's message, like any other failure.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::{Value, json};

use crate::endpoint::Endpoint;
use crate::model::{Credentials, LoginResponse, Registration};
use crate::mutation::{ActionMessages, Resolution};
use crate::outcome::ApiOutcome;
use crate::session::SessionStore;
use crate::toast::{Toast, ToastSink, UNEXPECTED_ERROR};
use crate::transport::{ApiRequest, ApiTransport, execute};

pub const POSTS_ROUTE: &str = "/posts";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";

const LOGIN_MESSAGES: ActionMessages = ActionMessages {
    success: Some("Logged in successfully!"),
    unauthorized: None,
    fallback: "Error logging in.",
};

const REGISTER_MESSAGES: ActionMessages = ActionMessages {
    success: Some("User registered successfully!"),
    unauthorized: None,
    fallback: "Error registering user.",
};

/// Toasts to show and where to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFlow {
    pub toasts: Vec<Toast>,
    pub navigate_to: Option<&'static str>,
}

impl AuthFlow {
    fn from_resolution(resolution: Resolution, next: &'static str) -> Self {
        let navigate_to = resolution.succeeded.then_some(next);
        Self { toasts: resolution.toasts, navigate_to }
    }

    /// Surface the toasts and hand back the navigation target.
    pub fn apply<K: ToastSink>(self, sink: &mut K) -> Option<&'static str> {
        sink.push_all(self.toasts);
        self.navigate_to
    }
}

/// `POST /login`; on success the token is stored in `session`.
pub async fn login<Tr, S>(transport: &Tr, session: &S, credentials: &Credentials) -> AuthFlow
where
    Tr: ApiTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let request = ApiRequest::new(Endpoint::Login)
        .with_body(json!({ "email": credentials.email, "password": credentials.password }));
    let outcome: ApiOutcome<LoginResponse> = execute(transport, &request).await;

    if let ApiOutcome::Success(response) = &outcome {
        if let Err(error) = session.store_token(&response.token) {
            tracing::error!(%error, "failed to persist session token");
            return AuthFlow { toasts: vec![Toast::error(UNEXPECTED_ERROR)], navigate_to: None };
        }
    }
    AuthFlow::from_resolution(Resolution::from_outcome(&outcome, &LOGIN_MESSAGES), POSTS_ROUTE)
}

/// `POST /register`; success leads to the login page.
pub async fn register<Tr>(transport: &Tr, registration: &Registration) -> AuthFlow
where
    Tr: ApiTransport + ?Sized,
{
    let request = ApiRequest::new(Endpoint::Register).with_body(json!({
        "name": registration.name,
        "email": registration.email,
        "password": registration.password,
    }));
    let outcome: ApiOutcome<Value> = execute(transport, &request).await;
    AuthFlow::from_resolution(Resolution::from_outcome(&outcome, &REGISTER_MESSAGES), LOGIN_ROUTE)
}
