//! UI components for the postboard client.

pub mod comment_dialogs;
pub mod comments_section;
pub mod dialog;
pub mod overflow_menu;
pub mod post_card;
pub mod post_dialogs;
pub mod toaster;
