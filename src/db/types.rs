//! Database type definitions
//!
//! Core data structures for representing database query results,
//! data types, and values.

use crate::error::{DbError, DbResult};

/// Query execution results
#[derive(Debug, Clone)]
pub struct QueryResults {
    /// Column definitions
    pub columns: Vec<ColumnDef>,
    /// Result rows
    pub rows: Vec<Row>,
    /// Rows returned, or rows affected for INSERT/UPDATE
    pub row_count: usize,
}

/// Column definition in query results
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Data type
    pub data_type: DataType,
}

/// Database data types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    // Integer types
    SmallInt,
    Integer,
    BigInt,

    // Floating point
    Real,
    Double,
    Numeric,

    // Text types
    Text,
    Varchar,
    Char,

    Boolean,

    // Other/unknown types
    Unknown(String),
}

/// A single row of query results
#[derive(Debug, Clone)]
pub struct Row {
    /// Cell values in column order
    pub values: Vec<CellValue>,
}

/// A cell value (single column value in a row)
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// NULL value
    Null,

    /// Integer value
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Text/string value (NUMERIC arrives here as its exact decimal string)
    Text(String),

    /// Boolean value
    Boolean(bool),
}

/// A borrowed view of one row, addressable by column name
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [ColumnDef],
    values: &'a [CellValue],
}

impl QueryResults {
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<Row>, row_count: usize) -> Self {
        Self {
            columns,
            rows,
            row_count,
        }
    }

    /// Results of a statement that returns no rows
    pub fn empty(row_count: usize) -> Self {
        Self::new(Vec::new(), Vec::new(), row_count)
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Iterate rows as column-name addressable records, in query order
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|row| Record {
            columns: &self.columns,
            values: &row.values,
        })
    }
}

impl<'a> Record<'a> {
    /// Value of the named column, if the column exists
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.columns
            .iter()
            .position(|c| c.name == column)
            .and_then(|i| self.values.get(i))
    }

    fn require(&self, column: &str) -> DbResult<&'a CellValue> {
        self.get(column)
            .ok_or_else(|| DbError::TypeConversion(format!("missing column '{}'", column)))
    }

    /// Read an integer identifier column
    pub fn get_id(&self, column: &str) -> DbResult<i32> {
        match self.require(column)? {
            CellValue::Integer(n) => i32::try_from(*n).map_err(|_| {
                DbError::TypeConversion(format!("column '{}' out of range: {}", column, n))
            }),
            other => Err(DbError::TypeConversion(format!(
                "column '{}' is not an integer: {:?}",
                column, other
            ))),
        }
    }

    /// Read a non-null text column
    pub fn get_text(&self, column: &str) -> DbResult<String> {
        match self.require(column)? {
            CellValue::Text(s) => Ok(s.clone()),
            CellValue::Null => Err(DbError::TypeConversion(format!(
                "column '{}' is NULL",
                column
            ))),
            other => Ok(other.to_display()),
        }
    }
}

impl DataType {
    /// Numbers are right-aligned when rendered
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::SmallInt
                | DataType::Integer
                | DataType::BigInt
                | DataType::Real
                | DataType::Double
                | DataType::Numeric
        )
    }
}

impl CellValue {
    /// Full text of the cell; NULL is empty
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => b.to_string(),
        }
    }
}
