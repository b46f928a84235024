//! Activity log repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::database::store::ActivityLogStore;
use crate::models::activity_log::{ActivityLogEntry, CreateActivityLogRequest};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ActivityLogStore for ActivityLogRepository {
    /// Append an entry; the log is never updated or truncated
    async fn append_activity(
        &self,
        request: &CreateActivityLogRequest,
    ) -> Result<ActivityLogEntry> {
        let entry = sqlx::query_as::<_, ActivityLogEntry>(
            r#"
            INSERT INTO activity_log (user_id, action, details, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, action, details, created_at
            "#,
        )
        .bind(request.user_id)
        .bind(&request.action)
        .bind(&request.details)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// List the most recent entries, newest first
    async fn list_recent_activity(&self, limit: i64) -> Result<Vec<ActivityLogEntry>> {
        let entries = sqlx::query_as::<_, ActivityLogEntry>(
            "SELECT id, user_id, action, details, created_at FROM activity_log ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
