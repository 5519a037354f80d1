//! Routed pages.

pub mod login;
pub mod posts;
pub mod register;
