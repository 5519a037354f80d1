//! Transient user-facing notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Shown whenever a call fails before producing a classifiable response.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Error, message: message.into() }
    }
}

/// Anything that can surface toasts: the browser toaster, the terminal, a test buffer.
pub trait ToastSink {
    fn push(&mut self, toast: Toast);

    fn push_all(&mut self, toasts: impl IntoIterator<Item = Toast>)
    where
        Self: Sized,
    {
        for toast in toasts {
            self.push(toast);
        }
    }
}

impl ToastSink for Vec<Toast> {
    fn push(&mut self, toast: Toast) {
        Vec::push(self, toast);
    }
}

/// Ordered toast buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.toasts
            .iter()
            .filter(|toast| toast.level == ToastLevel::Error)
            .map(|toast| toast.message.as_str())
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

impl ToastSink for ToastQueue {
    fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}
