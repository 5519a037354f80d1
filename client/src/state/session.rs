//! Session token persisted in the browser's `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token written by a successful login is read back when each mutation
//! builds its request. There is no expiry handling and no logout in the
//! browser; the token lives until storage is cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use contract::{SESSION_TOKEN_KEY, SessionError, SessionStore};

/// [`SessionStore`] backed by `window.localStorage`.
///
/// During server rendering there is no storage: reads return `None` and
/// writes fail with [`SessionError::Unavailable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(SESSION_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionError::Unavailable)?;
            storage
                .set_item(SESSION_TOKEN_KEY, token)
                .map_err(|e| SessionError::Write(storage_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, SESSION_TOKEN_KEY);
            Err(SessionError::Unavailable)
        }
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionError::Unavailable)?;
            storage
                .remove_item(SESSION_TOKEN_KEY)
                .map_err(|e| SessionError::Write(storage_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(any(test, feature = "hydrate"))]
fn storage_error_message(error: &impl std::fmt::Debug) -> String {
    format!("localStorage rejected the write: {error:?}")
}
