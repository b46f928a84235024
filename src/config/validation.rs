//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{GadTrackError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(GadTrackError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(GadTrackError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(GadTrackError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.officer_email_domain.is_empty() {
        return Err(GadTrackError::Config(
            "Officer email domain is required".to_string(),
        ));
    }

    if config.jwt_secret.is_empty() {
        return Err(GadTrackError::Config("JWT secret is required".to_string()));
    }

    if config.token_ttl_hours <= 0 {
        return Err(GadTrackError::Config(
            "Token TTL must be greater than 0".to_string(),
        ));
    }

    if config.min_password_length < 8 {
        return Err(GadTrackError::Config(
            "Minimum password length must be at least 8".to_string(),
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.output_dir.is_empty() {
        return Err(GadTrackError::Config(
            "Export output directory is required".to_string(),
        ));
    }

    if config.default_filename.is_empty() {
        return Err(GadTrackError::Config(
            "Default export filename is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GadTrackError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(GadTrackError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "test-secret".to_string();
        settings.auth.admin_activation_code = "GAD-ADMIN-2024".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.auth.jwt_secret = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_connection_bounds_rejected() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 10;
        assert!(validate_settings(&settings).is_err());
    }
}
