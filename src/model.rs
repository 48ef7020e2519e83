//! Reference data decoded from query rows
//!
//! These are the small projections the add/update flows fetch to build their
//! selection lists. Full listings are rendered straight from `QueryResults`.

use crate::db::{QueryResults, Record};
use crate::error::DbResult;

/// An organizational unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// A job title that can be assigned to an employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    pub id: i32,
    pub title: String,
}

/// An employee, as offered for selection (update target or manager)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeOption {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeOption {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Decode every row of `results` with `decode`, keeping query order
pub fn decode_all<T>(
    results: &QueryResults,
    decode: impl Fn(&Record<'_>) -> DbResult<T>,
) -> DbResult<Vec<T>> {
    results.records().map(|r| decode(&r)).collect()
}

impl Department {
    pub fn from_record(record: &Record<'_>) -> DbResult<Self> {
        Ok(Self {
            id: record.get_id("id")?,
            name: record.get_text("name")?,
        })
    }
}

impl RoleOption {
    pub fn from_record(record: &Record<'_>) -> DbResult<Self> {
        Ok(Self {
            id: record.get_id("id")?,
            title: record.get_text("title")?,
        })
    }
}

impl EmployeeOption {
    pub fn from_record(record: &Record<'_>) -> DbResult<Self> {
        Ok(Self {
            id: record.get_id("id")?,
            first_name: record.get_text("first_name")?,
            last_name: record.get_text("last_name")?,
        })
    }
}
