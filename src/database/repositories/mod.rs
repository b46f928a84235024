//! Repository implementations of the storage port

pub mod activity_log;
pub mod event;
pub mod participant;
pub mod user;

pub use activity_log::ActivityLogRepository;
pub use event::EventRepository;
pub use participant::ParticipantRepository;
pub use user::UserRepository;
