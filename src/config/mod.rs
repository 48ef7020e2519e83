//! Configuration management
//!
//! Handles loading connection profiles and user settings.

pub mod connections;
pub mod settings;

pub use connections::{ConnectionConfig, ConnectionSource, SslMode, load_connections};
pub use settings::Settings;
