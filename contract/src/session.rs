//! Session-token storage seam.
//!
//! DESIGN
//! ======
//! The token is the only state that outlives a page visit. Instead of every
//! call site reaching into ambient storage, a [`SessionStore`] is injected
//! into whatever issues authenticated calls and read at call time.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

/// Storage key the token is kept under.
pub const SESSION_TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No storage backend is reachable (server-side render, private mode).
    #[error("session storage unavailable")]
    Unavailable,
    /// The backend refused the write.
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Where the bearer token lives between calls.
pub trait SessionStore {
    /// Current token, read fresh on every call.
    fn token(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot persist the token.
    fn store_token(&self, token: &str) -> Result<(), SessionError>;

    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot remove the token.
    fn clear_token(&self) -> Result<(), SessionError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        let mut guard = self.token.lock().map_err(|e| SessionError::Write(e.to_string()))?;
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        let mut guard = self.token.lock().map_err(|e| SessionError::Write(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
