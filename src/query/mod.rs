//! # Query Layer
//!
//! Compositional SQL fragment building and generic row execution.

pub mod builder;
pub mod error;
pub mod execute;

pub use builder::OrderBy;
pub use error::{QueryError, QueryResult};
pub use execute::SqlParam;
