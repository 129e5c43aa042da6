//! Utility functions

pub mod helpers;

pub use helpers::{escape_html, is_empty_payload};
