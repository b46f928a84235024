//! GADtrack
//!
//! Backend for gender-and-development event and participant management.
//! This library provides modular components for authentication with role
//! inference, event and participant management with duplicate rejection,
//! demographic aggregation and event rollups, and CSV export/import.

pub mod config;
pub mod database;
pub mod models;
pub mod reporting;
pub mod services;
pub mod tabular;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GadTrackError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
