//! Database module
//!
//! This module handles database connections and the storage port.

pub mod connection;
pub mod repositories;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{
    ActivityLogRepository, EventRepository, ParticipantRepository, UserRepository,
};
pub use service::DatabaseService;
pub use store::{ActivityLogStore, EventStore, ParticipantStore, UserStore};
