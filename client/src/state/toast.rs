//! Toast stack rendered by the global toaster.
//!
//! DESIGN
//! ======
//! Each toast gets a monotonically increasing id so the toaster can key its
//! list and dismiss one entry (by click or timer) without disturbing the
//! rest.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use contract::{Toast, ToastSink};

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    items: Vec<ToastItem>,
    next_id: u64,
}

impl ToastState {
    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }

    /// Add a toast and return its id.
    pub fn show(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ToastItem { id, toast });
        id
    }

    /// Remove one toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }
}

impl ToastSink for ToastState {
    fn push(&mut self, toast: Toast) {
        self.show(toast);
    }
}

/// CSS modifier for a toast's level.
pub fn toast_class(toast: &Toast) -> &'static str {
    match toast.level {
        contract::ToastLevel::Success => "toast toast--success",
        contract::ToastLevel::Error => "toast toast--error",
    }
}
