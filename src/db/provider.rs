//! Database provider trait
//!
//! Defines the interface the tracker uses to reach its data store.
//! This abstraction allows for:
//! - The real PostgreSQL backend
//! - Easy testing with in-memory implementations
//! - Consistent error handling

use crate::db::types::QueryResults;
use crate::error::DbResult;
use rust_decimal::Decimal;

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// INTEGER (ids and foreign keys)
    Int(i32),
    /// TEXT / VARCHAR
    Text(String),
    /// NUMERIC / DECIMAL
    Numeric(Decimal),
    /// SQL NULL for a nullable INTEGER column
    NullInt,
}

impl Param {
    /// `Some(id)` binds the id, `None` binds a typed NULL
    pub fn optional_int(value: Option<i32>) -> Self {
        value.map_or(Param::NullInt, Param::Int)
    }
}

/// Data access contract
///
/// Executes one parameterized statement and returns its rows in the order
/// the database produced them. No validation or retry happens here: any
/// driver error comes back to the caller as a [`DbError`](crate::error::DbError).
#[allow(async_fn_in_trait)]
pub trait Database {
    /// Execute `sql` with `params` bound to `$1..$n`
    ///
    /// # Errors
    /// Returns `DbError::QueryFailed` if the statement is rejected or the
    /// connection is gone
    async fn query(&self, sql: &str, params: &[Param]) -> DbResult<QueryResults>;
}

impl<D: Database> Database for &D {
    async fn query(&self, sql: &str, params: &[Param]) -> DbResult<QueryResults> {
        (**self).query(sql, params).await
    }
}
