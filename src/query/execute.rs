//! # Row Execution Primitives
//!
//! Generic single-row and multi-row query execution over a caller-supplied
//! scan function. Two flavors:
//!
//! - direct: awaited in place, returning `Vec<T>` or `Option<T>`;
//! - spawned: an independent task runs the query and delivers exactly one
//!   terminal result on a [`tokio::sync::oneshot`] channel, letting a caller
//!   launch several independent queries and join on them in any order.
//!
//! The primitives never know the shape of `T`; the scan function owns it.
//! On any failure no partial results are returned.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

use super::error::{QueryError, QueryResult};

/// An owned SQL argument, movable into a spawned query task.
pub type SqlParam = Box<dyn ToSql + Send + Sync>;

/// Borrow a slice of owned params in the form the driver expects.
pub fn param_refs(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

/// Runs the query and scans every row into a `T`, aborting on the first scan
/// failure.
pub async fn execute_rows_query<T, F>(
    client: &Client,
    query: &str,
    params: &[&(dyn ToSql + Sync)],
    scan_fn: F,
) -> QueryResult<Vec<T>>
where
    F: Fn(&Row) -> Result<T, tokio_postgres::Error>,
{
    let rows = client
        .query(query, params)
        .await
        .map_err(QueryError::Execute)?;

    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        items.push(scan_fn(row).map_err(QueryError::Scan)?);
    }

    Ok(items)
}

/// Runs a query expected to return at most one row.
///
/// Zero rows is `Ok(None)` — explicit absence, never an error and never a
/// sentinel-valued placeholder row.
pub async fn execute_row_query<T, F>(
    client: &Client,
    query: &str,
    params: &[&(dyn ToSql + Sync)],
    scan_fn: F,
) -> QueryResult<Option<T>>
where
    F: Fn(&Row) -> Result<T, tokio_postgres::Error>,
{
    let row = client
        .query_opt(query, params)
        .await
        .map_err(QueryError::Execute)?;

    row.as_ref().map(scan_fn).transpose().map_err(QueryError::Scan)
}

/// Spawns [`execute_rows_query`] on an independent task and returns a
/// receiver immediately. Exactly one terminal envelope is sent: either the
/// full result set or the first error, never a sequence of partial sends.
pub fn spawn_rows_query<T, F>(
    client: Arc<Client>,
    query: String,
    params: Vec<SqlParam>,
    scan_fn: F,
) -> oneshot::Receiver<QueryResult<Vec<T>>>
where
    T: Send + 'static,
    F: Fn(&Row) -> Result<T, tokio_postgres::Error> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let refs = param_refs(&params);
        let result = execute_rows_query(&client, &query, &refs, scan_fn).await;
        // The receiver may have been dropped after an early return upstream.
        let _ = tx.send(result);
    });
    rx
}

/// Spawns [`execute_row_query`] on an independent task; same single-terminal
/// delivery contract as [`spawn_rows_query`].
pub fn spawn_row_query<T, F>(
    client: Arc<Client>,
    query: String,
    params: Vec<SqlParam>,
    scan_fn: F,
) -> oneshot::Receiver<QueryResult<Option<T>>>
where
    T: Send + 'static,
    F: Fn(&Row) -> Result<T, tokio_postgres::Error> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let refs = param_refs(&params);
        let result = execute_row_query(&client, &query, &refs, scan_fn).await;
        let _ = tx.send(result);
    });
    rx
}

/// Awaits a spawned query's terminal envelope, translating a vanished worker
/// into [`QueryError::ChannelClosed`].
pub async fn await_result<T>(rx: oneshot::Receiver<QueryResult<T>>) -> QueryResult<T> {
    rx.await.map_err(|_| QueryError::ChannelClosed)?
}
