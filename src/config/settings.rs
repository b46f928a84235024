//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Email domain whose sign-ups become officers
    pub officer_email_domain: String,
    /// Activation code required for admin sign-up
    pub admin_activation_code: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub min_password_length: usize,
}

/// Export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory where exported CSV reports are written
    pub output_dir: String,
    /// Default filename used when a caller does not supply one
    pub default_filename: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("GADTRACK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::GadTrackError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "postgresql://localhost/gadtrack".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            auth: AuthConfig {
                officer_email_domain: "university.edu.ph".to_string(),
                admin_activation_code: String::new(),
                jwt_secret: String::new(),
                token_ttl_hours: 12,
                min_password_length: 8,
            },
            export: ExportConfig {
                output_dir: "./exports".to_string(),
                default_filename: "event_data.csv".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/gadtrack".to_string(),
            },
        }
    }
}
