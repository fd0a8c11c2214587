//! Shared error types, result helpers and built-in defaults

pub mod defaults;
pub mod error;
pub mod result;
