//! Session token kept in a plain file between CLI invocations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use contract::{SessionError, SessionStore};

/// [`SessionStore`] backed by one file holding the bearer token.
///
/// A missing or blank file means "no token".
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        std::fs::write(&self.path, format!("{token}\n")).map_err(|e| SessionError::Write(e.to_string()))
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write(e.to_string())),
        }
    }
}
