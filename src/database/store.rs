//! Storage port
//!
//! The single storage interface the services depend on. The sqlx-backed
//! repositories are the one implementation; nothing above this module
//! names a concrete backend.

use crate::models::{
    ActivityLogEntry, CreateActivityLogRequest, CreateEventRequest, CreateUserRecord, Event,
    Participant, RegisterParticipantRequest, UpdateEventRequest, UpdateParticipantRequest,
    UpdateUserRequest, User,
};
use crate::utils::errors::Result;

/// Event storage operations
pub trait EventStore {
    async fn create_event(&self, request: &CreateEventRequest, hours: i32) -> Result<Event>;
    async fn find_event_by_id(&self, id: i64) -> Result<Option<Event>>;
    /// Case-insensitive lookup by event name
    async fn find_event_by_name(&self, name: &str) -> Result<Option<Event>>;
    async fn list_events(&self) -> Result<Vec<Event>>;
    async fn update_event(&self, id: i64, request: &UpdateEventRequest) -> Result<Event>;
    async fn delete_event(&self, id: i64) -> Result<()>;
}

/// Participant storage operations
pub trait ParticipantStore {
    async fn register_participant(
        &self,
        request: &RegisterParticipantRequest,
    ) -> Result<Participant>;
    async fn find_participant_by_id(&self, id: i64) -> Result<Option<Participant>>;
    async fn list_participants_by_event(&self, event_id: i64) -> Result<Vec<Participant>>;
    async fn list_all_participants(&self) -> Result<Vec<Participant>>;
    async fn update_participant(
        &self,
        id: i64,
        request: &UpdateParticipantRequest,
    ) -> Result<Participant>;
    async fn delete_participant(&self, id: i64) -> Result<()>;
}

/// User storage operations
pub trait UserStore {
    async fn create_user(&self, record: &CreateUserRecord) -> Result<User>;
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<User>;
    async fn delete_user(&self, id: i64) -> Result<()>;
}

/// Activity log storage operations (append-only)
pub trait ActivityLogStore {
    async fn append_activity(&self, request: &CreateActivityLogRequest)
        -> Result<ActivityLogEntry>;
    async fn list_recent_activity(&self, limit: i64) -> Result<Vec<ActivityLogEntry>>;
}
