//! Data models module
//!
//! This module contains all data structures used throughout the application.
//! Each record shape is declared exactly once here and consumed everywhere
//! it is validated, persisted, aggregated, or exported.

pub mod activity_log;
pub mod event;
pub mod participant;
pub mod user;

// Re-export commonly used models
pub use activity_log::{ActivityLogEntry, CreateActivityLogRequest};
pub use event::{CreateEventRequest, Event, EventType, UpdateEventRequest};
pub use participant::{
    Participant, RegisterParticipantRequest, Sex, UpdateParticipantRequest, ETHNIC_GROUP_OTHER,
};
pub use user::{CreateUserRecord, Role, SignUpRequest, UpdateUserRequest, User};
