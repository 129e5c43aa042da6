//! Core data models for backup export

pub mod backup;
pub mod session;

pub use backup::*;
pub use session::*;
