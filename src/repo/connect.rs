//! Per-call database connection acquisition.
//!
//! A connection is opened for each top-level repository call and dropped at
//! the end of that call regardless of the return path; dropping the client
//! terminates the driver task.

use tokio_postgres::{Client, NoTls};

use crate::config::DatabaseConfig;
use crate::observability::{Logger, Severity};
use crate::query::{QueryError, QueryResult};

/// Opens a connection and spawns the driver task that services it.
pub async fn connect(config: &DatabaseConfig) -> QueryResult<Client> {
    let (client, connection) = tokio_postgres::connect(&config.connection_string(), NoTls)
        .await
        .map_err(QueryError::Connection)?;

    tokio::spawn(async move {
        if let Err(err) = connection.await {
            Logger::log_stderr(
                Severity::Error,
                "db_connection_error",
                &[("error", &err.to_string())],
            );
        }
    });

    Ok(client)
}
