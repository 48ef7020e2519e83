//! Database abstraction layer
//!
//! This module provides a trait-based abstraction over database operations,
//! allowing the real PostgreSQL backend and easy testing with fakes.

pub mod postgres;
pub mod provider;
pub mod types;

// Re-export main types
pub use provider::{Database, Param};
pub use types::{CellValue, ColumnDef, DataType, QueryResults, Record, Row};
