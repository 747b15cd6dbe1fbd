//! # Observability
//!
//! Structured logging for server lifecycle and request-scoped failures.

pub mod logger;

pub use logger::{Logger, Severity};
