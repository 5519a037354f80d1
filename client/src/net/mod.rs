//! Browser networking for the postboard client.

pub mod api;
