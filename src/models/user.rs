//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::GadTrackError;

/// User role enumeration. Roles are inferred at sign-up, never chosen
/// freely by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Officer,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Officer => "officer",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = GadTrackError;

    fn from_str(s: &str) -> Result<Self, GadTrackError> {
        match s {
            "admin" => Ok(Role::Admin),
            "officer" => Ok(Role::Officer),
            "user" => Ok(Role::User),
            other => Err(GadTrackError::InvalidInput(format!("Unknown role: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Admin activation code; grants the admin role only when it matches
    /// the configured value
    pub admin_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

/// Internal create request carried from the auth service to the store,
/// after hashing and role inference
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
