//! Integration tests for PostgresProvider and the tracker against a real server
//!
//! These tests require a running PostgreSQL database; see `tests/integration.rs`.

use crate::common::{Answer, ScriptedPrompter};
use employee_tracker::config::ConnectionConfig;
use employee_tracker::config::connections::SslMode;
use employee_tracker::db::postgres::PostgresProvider;
use employee_tracker::db::{CellValue, Database, Param, QueryResults};
use employee_tracker::error::DbError;
use employee_tracker::tracker::{Tracker, queries};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};

use Answer::{Pick, Type};

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Get test database connection config
fn test_config() -> ConnectionConfig {
    ConnectionConfig {
        name: "integration-test".to_string(),
        host: std::env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        port: std::env::var("TEST_DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5433),
        database: std::env::var("TEST_DB_NAME").unwrap_or_else(|_| "test_db".to_string()),
        username: std::env::var("TEST_DB_USER").unwrap_or_else(|_| "test_user".to_string()),
        password: Some(
            std::env::var("TEST_DB_PASSWORD").unwrap_or_else(|_| "test_password".to_string()),
        ),
        ssl_mode: SslMode::Disable,
    }
}

/// A connection whose search_path points at a freshly loaded schema
struct Fixture {
    provider: PostgresProvider,
    schema: String,
}

impl Fixture {
    async fn drop_schema(&self) {
        let cleanup = PostgresProvider::connect(&test_config()).await;
        if let Ok(admin) = cleanup {
            let _ = admin
                .execute_batch(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
                .await;
        }
    }
}

async fn setup() -> Option<Fixture> {
    let config = test_config();
    let provider = match PostgresProvider::connect(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!(
                "Skipping test: Database not available at {}:{} - {}",
                config.host, config.port, e
            );
            return None;
        }
    };

    let schema = format!(
        "tracker_test_{}_{}",
        std::process::id(),
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    provider
        .execute_batch(&format!(
            "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}; SET search_path TO {schema};"
        ))
        .await
        .expect("create test schema");
    provider
        .execute_batch(SCHEMA_SQL)
        .await
        .expect("load fixture schema");

    Some(Fixture { provider, schema })
}

async fn run_script(provider: &PostgresProvider, answers: Vec<Answer>) -> ScriptedPrompter {
    let mut tracker = Tracker::new(provider, ScriptedPrompter::new(answers));
    tracker.run().await.expect("loop should end cleanly");
    tracker.into_prompter()
}

fn column<'a>(results: &'a QueryResults, row: usize, name: &str) -> &'a CellValue {
    let idx = results.column_index(name).expect("column present");
    &results.rows[row].values[idx]
}

fn find_row(results: &QueryResults, name: &str, value: &str) -> usize {
    let idx = results.column_index(name).expect("column present");
    results
        .rows
        .iter()
        .position(|r| r.values[idx] == CellValue::Text(value.to_string()))
        .unwrap_or_else(|| panic!("no row with {} = {}", name, value))
}

#[tokio::test]
async fn test_connection_failure() {
    let config = ConnectionConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..test_config()
    };
    let result = PostgresProvider::connect(&config).await;
    assert!(matches!(result, Err(DbError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_query_with_parameters() {
    let Some(fx) = setup().await else { return };

    let results = fx
        .provider
        .query(
            "SELECT $1::int AS n, $2::text AS t, $3::numeric AS d, $4::int AS missing",
            &[
                Param::Int(7),
                Param::Text("hello".to_string()),
                Param::Numeric(Decimal::new(12345, 2)),
                Param::NullInt,
            ],
        )
        .await
        .expect("query should succeed");

    assert_eq!(results.row_count, 1);
    assert_eq!(column(&results, 0, "n"), &CellValue::Integer(7));
    assert_eq!(column(&results, 0, "t"), &CellValue::Text("hello".to_string()));
    assert_eq!(column(&results, 0, "d"), &CellValue::Text("123.45".to_string()));
    assert_eq!(column(&results, 0, "missing"), &CellValue::Null);

    fx.drop_schema().await;
}

#[tokio::test]
async fn test_malformed_query_is_query_failed() {
    let Some(fx) = setup().await else { return };
    let result = fx.provider.query("SELEC nonsense", &[]).await;
    assert!(matches!(result, Err(DbError::QueryFailed(_))));
    fx.drop_schema().await;
}

#[tokio::test]
async fn test_foreign_key_violation_is_reported() {
    let Some(fx) = setup().await else { return };
    let result = fx
        .provider
        .query(
            queries::INSERT_ROLE,
            &[
                Param::Text("Ghost".to_string()),
                Param::Numeric(Decimal::new(1, 0)),
                Param::Int(9999),
            ],
        )
        .await;
    match result {
        Err(DbError::QueryFailed(msg)) => assert!(msg.contains("foreign key"), "{}", msg),
        other => panic!("expected foreign key failure, got {:?}", other),
    }
    fx.drop_schema().await;
}

#[tokio::test]
async fn test_insert_reports_rows_affected() {
    let Some(fx) = setup().await else { return };
    let results = fx
        .provider
        .query(queries::INSERT_DEPARTMENT, &[Param::Text("Legal".to_string())])
        .await
        .unwrap();
    assert!(results.columns.is_empty());
    assert_eq!(results.row_count, 1);
    fx.drop_schema().await;
}

#[tokio::test]
async fn test_add_department_gets_new_id() {
    let Some(fx) = setup().await else { return };

    let before = fx.provider.query(queries::VIEW_DEPARTMENTS, &[]).await.unwrap();
    let out = run_script(
        &fx.provider,
        vec![Pick("Add a department"), Type("Legal"), Pick("Exit")],
    )
    .await;
    assert_eq!(out.said[0], "Department \"Legal\" added successfully!");

    let after = fx.provider.query(queries::VIEW_DEPARTMENTS, &[]).await.unwrap();
    assert_eq!(after.row_count, before.row_count + 1);
    let row = find_row(&after, "name", "Legal");
    let new_id = column(&after, row, "id").clone();
    let existing: Vec<&CellValue> = before.rows.iter().map(|r| &r.values[0]).collect();
    assert!(!existing.contains(&&new_id));

    fx.drop_schema().await;
}

#[tokio::test]
async fn test_add_role_view_shows_department_name() {
    let Some(fx) = setup().await else { return };

    run_script(
        &fx.provider,
        vec![
            Pick("Add a role"),
            Type("Paralegal"),
            Type("abc"),
            Type("50000.50"),
            Pick("Sales"),
            Pick("Exit"),
        ],
    )
    .await;

    let roles = fx.provider.query(queries::VIEW_ROLES, &[]).await.unwrap();
    let row = find_row(&roles, "title", "Paralegal");
    assert_eq!(column(&roles, row, "department"), &CellValue::Text("Sales".to_string()));
    assert_eq!(column(&roles, row, "salary"), &CellValue::Text("50000.50".to_string()));

    fx.drop_schema().await;
}

#[tokio::test]
async fn test_add_employee_manager_none_and_some() {
    let Some(fx) = setup().await else { return };

    run_script(
        &fx.provider,
        vec![
            Pick("Add an employee"),
            Type("Grace"),
            Type("Hopper"),
            Pick("Developer"),
            Pick("None"),
            Pick("Add an employee"),
            Type("Katherine"),
            Type("Johnson"),
            Pick("Account Manager"),
            Pick("Ada Lovelace"),
            Pick("Exit"),
        ],
    )
    .await;

    let employees = fx.provider.query(queries::VIEW_EMPLOYEES, &[]).await.unwrap();

    let grace = find_row(&employees, "first_name", "Grace");
    assert_eq!(column(&employees, grace, "manager"), &CellValue::Null);

    let katherine = find_row(&employees, "first_name", "Katherine");
    assert_eq!(
        column(&employees, katherine, "manager"),
        &CellValue::Text("Ada Lovelace".to_string())
    );
    assert_eq!(
        column(&employees, katherine, "department"),
        &CellValue::Text("Sales".to_string())
    );

    let raw = fx
        .provider
        .query(
            "SELECT manager_id FROM employee WHERE first_name = $1",
            &[Param::Text("Grace".to_string())],
        )
        .await
        .unwrap();
    assert_eq!(raw.rows[0].values[0], CellValue::Null);

    fx.drop_schema().await;
}

#[tokio::test]
async fn test_update_role_touches_only_selected_employee() {
    let Some(fx) = setup().await else { return };

    let snapshot = "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id";
    let before = fx.provider.query(snapshot, &[]).await.unwrap();

    let out = run_script(
        &fx.provider,
        vec![
            Pick("Update employee role"),
            Pick("Alan Turing"),
            Pick("Account Manager"),
            Pick("Exit"),
        ],
    )
    .await;
    assert_eq!(out.said[0], "Employee role updated successfully!");

    let after = fx.provider.query(snapshot, &[]).await.unwrap();
    assert_eq!(before.row_count, after.row_count);
    for (b, a) in before.rows.iter().zip(after.rows.iter()) {
        if b.values[1] == CellValue::Text("Alan".to_string()) {
            assert_eq!(a.values[3], CellValue::Integer(2));
            assert_eq!(a.values[4], b.values[4]);
        } else {
            assert_eq!(a.values, b.values);
        }
    }

    let employees = fx.provider.query(queries::VIEW_EMPLOYEES, &[]).await.unwrap();
    let alan = find_row(&employees, "first_name", "Alan");
    assert_eq!(
        column(&employees, alan, "title"),
        &CellValue::Text("Account Manager".to_string())
    );
    assert_eq!(
        column(&employees, alan, "salary"),
        &CellValue::Text("60000".to_string())
    );

    fx.drop_schema().await;
}

#[tokio::test]
async fn test_dropped_connection_keeps_menu_alive() {
    let Some(fx) = setup().await else { return };

    // Kill our own backend; every later statement on this client fails
    let _ = fx
        .provider
        .query("SELECT pg_terminate_backend(pg_backend_pid())", &[])
        .await;

    let out = run_script(
        &fx.provider,
        vec![
            Pick("Add a department"),
            Type("Legal"),
            Pick("View all departments"),
            Pick("Exit"),
        ],
    )
    .await;

    assert_eq!(out.warned.len(), 2);
    assert!(out.warned[0].starts_with("Error adding department: "));
    assert!(out.warned[1].starts_with("Error fetching departments: "));
    assert_eq!(out.said, vec!["Goodbye!"]);

    // Nothing was written behind the failure
    let check = PostgresProvider::connect(&test_config()).await.unwrap();
    let legal = check
        .query(
            &format!("SELECT count(*) AS n FROM {}.department WHERE name = $1", fx.schema),
            &[Param::Text("Legal".to_string())],
        )
        .await
        .unwrap();
    assert_eq!(legal.rows[0].values[0], CellValue::Integer(0));

    fx.drop_schema().await;
}
