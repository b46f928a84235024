//! Event repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::database::store::EventStore;
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str = "id, name, event_date, time_from, time_to, venue, event_type, category, hours, created_by, created_at, updated_at";

impl EventStore for EventRepository {
    /// Create a new event
    async fn create_event(&self, request: &CreateEventRequest, hours: i32) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, event_date, time_from, time_to, venue, event_type, category, hours, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, event_date, time_from, time_to, venue, event_type, category, hours, created_by, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.event_date)
        .bind(request.time_from)
        .bind(request.time_to)
        .bind(&request.venue)
        .bind(request.event_type.as_str())
        .bind(&request.category)
        .bind(hours)
        .bind(request.created_by)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    async fn find_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by name, case-insensitively
    async fn find_event_by_name(&self, name: &str) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE LOWER(name) = LOWER($1)"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events, soonest first
    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Update event
    async fn update_event(&self, id: i64, request: &UpdateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                event_date = COALESCE($3, event_date),
                time_from = COALESCE($4, time_from),
                time_to = COALESCE($5, time_to),
                venue = COALESCE($6, venue),
                event_type = COALESCE($7, event_type),
                category = COALESCE($8, category),
                hours = COALESCE($9, hours),
                updated_at = $10
            WHERE id = $1
            RETURNING id, name, event_date, time_from, time_to, venue, event_type, category, hours, created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.event_date)
        .bind(request.time_from)
        .bind(request.time_to)
        .bind(&request.venue)
        .bind(request.event_type.map(|t| t.as_str()))
        .bind(&request.category)
        .bind(request.hours)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete event; participants cascade through the FK
    async fn delete_event(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
