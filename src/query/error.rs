//! # Query Errors
//!
//! Error taxonomy for the data-access layer.
//!
//! Absence is not an error: a by-code lookup that finds no row returns
//! `Ok(None)`, and soft business declines are carried as data in the service
//! envelopes. Only connection, execution and scan failures surface here.

use thiserror::Error;

/// Result type for data-access operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Data-access errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// Could not obtain a usable database connection
    #[error("failed to connect to the database: {0}")]
    Connection(#[source] tokio_postgres::Error),

    /// The query failed to run
    #[error("query execution failed: {0}")]
    Execute(#[source] tokio_postgres::Error),

    /// A row did not match the expected shape
    #[error("row scan failed: {0}")]
    Scan(#[source] tokio_postgres::Error),

    /// A spawned query worker dropped its channel before delivering a result
    #[error("query worker dropped its result channel")]
    ChannelClosed,

    /// A lower-level error wrapped with a descriptive prefix at a layer
    /// boundary, so the outermost consumer can log the full causal chain
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<QueryError>,
    },
}

impl QueryError {
    /// Wrap this error with a descriptive prefix.
    pub fn context(self, message: impl Into<String>) -> Self {
        QueryError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_closed_display() {
        let err = QueryError::ChannelClosed;
        assert_eq!(err.to_string(), "query worker dropped its result channel");
    }

    #[test]
    fn test_context_prefixes_message() {
        let err = QueryError::ChannelClosed.context("seat class query");
        assert_eq!(
            err.to_string(),
            "seat class query: query worker dropped its result channel"
        );
    }

    #[test]
    fn test_context_chain_preserves_source() {
        use std::error::Error as _;

        let err = QueryError::ChannelClosed
            .context("inner")
            .context("outer");
        let source = err.source().expect("outer context has a source");
        assert_eq!(
            source.to_string(),
            "inner: query worker dropped its result channel"
        );
    }
}
