//! Integration tests against a live PostgreSQL.
//!
//! Run with `cargo test --features pg-tests`; the connection string is taken
//! from `AVIAREF_TEST_DB` (libpq keyword format) or defaults to a local
//! server. Each test works on a session-scoped temporary table.

#![cfg(feature = "pg-tests")]

use std::sync::Arc;

use tokio_postgres::{Client, NoTls, Row};

use aviaref::model::PageInfo;
use aviaref::query::builder::{add_order_by_clause, add_pagination_clause};
use aviaref::query::execute::{
    await_result, execute_row_query, execute_rows_query, spawn_rows_query,
};
use aviaref::query::{OrderBy, QueryError};

async fn test_client() -> Client {
    let conn_str = std::env::var("AVIAREF_TEST_DB")
        .unwrap_or_else(|_| "host=localhost user=postgres dbname=postgres".to_string());
    let (client, connection) = tokio_postgres::connect(&conn_str, NoTls)
        .await
        .expect("test database must be reachable");
    tokio::spawn(async move {
        let _ = connection.await;
    });
    client
}

async fn seed_codes(client: &Client) {
    client
        .batch_execute(
            "create temporary table ref_codes (code text primary key, rank int not null); \
             insert into ref_codes values ('A', 1), ('B', 2), ('C', 3)",
        )
        .await
        .expect("seed temp table");
}

fn scan_code(row: &Row) -> Result<(String, i32), tokio_postgres::Error> {
    Ok((row.try_get(0)?, row.try_get(1)?))
}

#[tokio::test]
async fn sync_and_spawned_execution_agree() {
    let client = Arc::new(test_client().await);
    seed_codes(&client).await;

    let query = "select code, rank from ref_codes order by code";

    let direct = execute_rows_query(&client, query, &[], scan_code)
        .await
        .unwrap();
    let rx = spawn_rows_query(client.clone(), query.to_string(), Vec::new(), scan_code);
    let spawned = await_result(rx).await.unwrap();

    assert_eq!(direct, spawned);
    assert_eq!(direct.len(), 3);
}

#[tokio::test]
async fn row_query_distinguishes_absence_from_error() {
    let client = test_client().await;
    seed_codes(&client).await;

    let found = execute_row_query(
        &client,
        "select code, rank from ref_codes where code = $1",
        &[&"A"],
        scan_code,
    )
    .await
    .unwrap();
    assert!(found.is_some());

    let absent = execute_row_query(
        &client,
        "select code, rank from ref_codes where code = $1",
        &[&"Z"],
        scan_code,
    )
    .await
    .unwrap();
    assert!(absent.is_none());

    let err = execute_rows_query(&client, "select nope from ref_codes", &[], scan_code)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::Execute(_)));
}

#[tokio::test]
async fn pagination_absence_returns_all_rows() {
    let client = test_client().await;
    seed_codes(&client).await;

    let base = add_order_by_clause("select code, rank from ref_codes", &[OrderBy::asc("code")]);

    let (query, args) = add_pagination_clause(&base, &PageInfo::default(), 1);
    assert!(args.is_empty());
    let all = execute_rows_query(&client, &query, &[], scan_code).await.unwrap();
    assert_eq!(all.len(), 3);

    let pager = PageInfo {
        limit: None,
        offset: Some(1),
    };
    let (query, args) = add_pagination_clause(&base, &pager, 1);
    let params: Vec<&(dyn tokio_postgres::types::ToSql + Sync)> =
        args.iter().map(|a| a as _).collect();
    let tail = execute_rows_query(&client, &query, &params, scan_code)
        .await
        .unwrap();
    assert_eq!(tail.len(), 2);
    assert_eq!(tail[0].0, "B");
}
