//! User repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::database::store::UserStore;
use crate::models::user::{CreateUserRecord, UpdateUserRequest, User};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str =
    "id, full_name, email, password_hash, role, is_active, created_at, updated_at";

impl UserStore for UserRepository {
    /// Create a new user with an already-hashed password
    async fn create_user(&self, record: &CreateUserRecord) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, password_hash, role, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, true, $5, $6)
            RETURNING id, full_name, email, password_hash, role, is_active, created_at, updated_at
            "#,
        )
        .bind(&record.full_name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.role.as_str())
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email, case-insensitively
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Update user profile, role, or status
    async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                role = COALESCE($3, role),
                is_active = COALESCE($4, is_active),
                updated_at = $5
            WHERE id = $1
            RETURNING id, full_name, email, password_hash, role, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&request.full_name)
        .bind(request.role.map(|r| r.as_str()))
        .bind(request.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete user
    async fn delete_user(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
