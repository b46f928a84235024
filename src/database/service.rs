//! Database service layer
//!
//! Aggregates the per-entity repositories behind one handle.

use crate::database::{
    ActivityLogRepository, DatabasePool, EventRepository, ParticipantRepository, UserRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub events: EventRepository,
    pub participants: ParticipantRepository,
    pub users: UserRepository,
    pub activity_log: ActivityLogRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            participants: ParticipantRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            activity_log: ActivityLogRepository::new(pool),
        }
    }
}
