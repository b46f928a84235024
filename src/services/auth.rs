//! Authentication service
//!
//! Sign-up with role inference, credential sign-in, and session tokens.
//! Passwords are hashed with Argon2id and stored in PHC string format so
//! that algorithm parameters and salt travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::database::store::UserStore;
use crate::models::user::{CreateUserRecord, Role, SignUpRequest, User};
use crate::utils::errors::{GadTrackError, Result};
use crate::utils::helpers::{email_domain, generate_random_string, is_valid_email};

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub exp: i64,
}

/// Hash a plaintext password using Argon2id with a random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Infer the role for a sign-up. A correct admin activation code grants
/// admin; an email under the officer domain grants officer; everything
/// else is a plain user. The caller never picks a role directly.
pub fn infer_role(email: &str, admin_code: Option<&str>, settings: &Settings) -> Role {
    let code_matches = admin_code
        .map(|code| {
            !settings.auth.admin_activation_code.is_empty()
                && code == settings.auth.admin_activation_code
        })
        .unwrap_or(false);
    if code_matches {
        return Role::Admin;
    }

    match email_domain(email) {
        Some(domain) if domain == settings.auth.officer_email_domain.to_lowercase() => {
            Role::Officer
        }
        _ => Role::User,
    }
}

/// Generate a fresh admin activation code
pub fn generate_activation_code() -> String {
    format!("GAD-{}", generate_random_string(10))
}

/// Authentication service over the user store
#[derive(Debug, Clone)]
pub struct AuthService<U> {
    users: U,
    settings: Settings,
}

impl<U: UserStore> AuthService<U> {
    pub fn new(users: U, settings: Settings) -> Self {
        Self { users, settings }
    }

    /// Register a new user. Rejects malformed emails, weak passwords, and
    /// duplicate email addresses; infers the role from the email domain
    /// and the supplied activation code.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<User> {
        if request.full_name.trim().is_empty() {
            return Err(GadTrackError::Validation("Name is required".to_string()));
        }
        if !is_valid_email(&request.email) {
            return Err(GadTrackError::Validation(format!(
                "Invalid email address: {}",
                request.email
            )));
        }
        if request.password.len() < self.settings.auth.min_password_length {
            return Err(GadTrackError::Validation(format!(
                "Password must be at least {} characters long",
                self.settings.auth.min_password_length
            )));
        }
        if request
            .admin_code
            .as_deref()
            .is_some_and(|code| code != self.settings.auth.admin_activation_code)
        {
            return Err(GadTrackError::Validation(
                "Incorrect admin activation code".to_string(),
            ));
        }

        if self.users.find_user_by_email(&request.email).await?.is_some() {
            warn!(email = %request.email, "Sign-up rejected: email already registered");
            return Err(GadTrackError::DuplicateEmail {
                email: request.email,
            });
        }

        let role = infer_role(&request.email, request.admin_code.as_deref(), &self.settings);
        let record = CreateUserRecord {
            full_name: request.full_name,
            email: request.email.to_lowercase(),
            password_hash: hash_password(&request.password)?,
            role,
        };

        let user = self.users.create_user(&record).await?;
        info!(user_id = user.id, role = %role, "New user signed up");

        Ok(user)
    }

    /// Authenticate a user and issue a session token
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(User, String)> {
        let user = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| GadTrackError::Authentication("Invalid credentials".to_string()))?;

        if !user.is_active {
            return Err(GadTrackError::Authentication(
                "Account is deactivated".to_string(),
            ));
        }

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Sign-in rejected: wrong password");
            return Err(GadTrackError::Authentication(
                "Invalid credentials".to_string(),
            ));
        }

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "User signed in");

        Ok((user, token))
    }

    /// Issue a JWT for an authenticated user
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            exp: (Utc::now() + Duration::hours(self.settings.auth.token_ttl_hours)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Decode and validate a session token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.officer_email_domain = "university.edu.ph".to_string();
        settings.auth.admin_activation_code = "GAD-SECRET2024".to_string();
        settings.auth.jwt_secret = "test-secret".to_string();
        settings
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct-horse-battery", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_correct_admin_code_grants_admin() {
        let role = infer_role("someone@gmail.com", Some("GAD-SECRET2024"), &settings());
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_officer_domain_grants_officer() {
        let role = infer_role("officer@university.edu.ph", None, &settings());
        assert_eq!(role, Role::Officer);

        // domain match is case-insensitive
        let role = infer_role("officer@UNIVERSITY.EDU.PH", None, &settings());
        assert_eq!(role, Role::Officer);
    }

    #[test]
    fn test_other_domains_grant_plain_user() {
        let role = infer_role("someone@gmail.com", None, &settings());
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_wrong_code_does_not_grant_admin() {
        let role = infer_role("officer@university.edu.ph", Some("nope"), &settings());
        assert_eq!(role, Role::Officer);
    }

    #[test]
    fn test_empty_configured_code_never_matches() {
        let mut s = settings();
        s.auth.admin_activation_code = String::new();
        let role = infer_role("someone@gmail.com", Some(""), &s);
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_activation_code_shape() {
        let code = generate_activation_code();
        assert!(code.starts_with("GAD-"));
        assert_eq!(code.len(), 14);
    }
}
