//! Error types for employee-tracker
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors with clear error chains.

/// Main error type for the employee-tracker application
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

/// Database operation errors
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Failed to establish connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed (malformed SQL, constraint violation, lost connection)
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Type conversion error
    #[error("Type conversion error: {0}")]
    TypeConversion(String),
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Config file could not be read
    #[error("Configuration file not readable: {0}")]
    NotFound(String),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Connection profile not found
    #[error("Connection profile '{0}' not found")]
    ProfileNotFound(String),
}

/// Terminal prompt errors
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User pressed Escape; the current action is abandoned
    #[error("Prompt cancelled")]
    Cancelled,

    /// User pressed Ctrl+C; the whole session ends
    #[error("Prompt interrupted")]
    Interrupted,

    /// A selection outside the presented choices
    #[error("Invalid selection: {0}")]
    InvalidSelection(usize),

    /// The terminal could not be driven
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Specialized Result type for employee-tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Specialized Result type for database operations
pub type DbResult<T> = std::result::Result<T, DbError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized Result type for prompt operations
pub type PromptResult<T> = std::result::Result<T, PromptError>;
