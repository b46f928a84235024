//! Participant repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::database::store::ParticipantStore;
use crate::models::participant::{
    Participant, RegisterParticipantRequest, UpdateParticipantRequest,
};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PARTICIPANT_COLUMNS: &str = "id, student_id, full_name, sex, age, school, year_level, section, ethnic_group, other_ethnic_group, event_id, created_at, updated_at";

impl ParticipantStore for ParticipantRepository {
    /// Register a participant against an event
    async fn register_participant(
        &self,
        request: &RegisterParticipantRequest,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (student_id, full_name, sex, age, school, year_level, section, ethnic_group, other_ethnic_group, event_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, student_id, full_name, sex, age, school, year_level, section, ethnic_group, other_ethnic_group, event_id, created_at, updated_at
            "#,
        )
        .bind(&request.student_id)
        .bind(&request.full_name)
        .bind(request.sex.as_str())
        .bind(request.age)
        .bind(&request.school)
        .bind(&request.year_level)
        .bind(&request.section)
        .bind(&request.ethnic_group)
        .bind(&request.other_ethnic_group)
        .bind(request.event_id)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by ID
    async fn find_participant_by_id(&self, id: i64) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Get the roster for one event, oldest registration first
    async fn list_participants_by_event(&self, event_id: i64) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE event_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// List every participant across all events
    async fn list_all_participants(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants ORDER BY event_id ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// Update participant
    async fn update_participant(
        &self,
        id: i64,
        request: &UpdateParticipantRequest,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET student_id = COALESCE($2, student_id),
                full_name = COALESCE($3, full_name),
                sex = COALESCE($4, sex),
                age = COALESCE($5, age),
                school = COALESCE($6, school),
                year_level = COALESCE($7, year_level),
                section = COALESCE($8, section),
                ethnic_group = COALESCE($9, ethnic_group),
                other_ethnic_group = COALESCE($10, other_ethnic_group),
                updated_at = $11
            WHERE id = $1
            RETURNING id, student_id, full_name, sex, age, school, year_level, section, ethnic_group, other_ethnic_group, event_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&request.student_id)
        .bind(&request.full_name)
        .bind(request.sex.map(|s| s.as_str()))
        .bind(request.age)
        .bind(&request.school)
        .bind(&request.year_level)
        .bind(&request.section)
        .bind(&request.ethnic_group)
        .bind(&request.other_ethnic_group)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Delete participant
    async fn delete_participant(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
