//! Services module
//!
//! This module contains business logic services

pub mod admin;
pub mod auth;
pub mod event;
pub mod notification;
pub mod report;

// Re-export commonly used services
pub use admin::AdminService;
pub use auth::{generate_activation_code, hash_password, infer_role, verify_password, AuthService, Claims};
pub use event::{check_duplicate, EventService};
pub use notification::{Notification, NotificationLevel, NotificationService};
pub use report::{row_to_request, DemographicReport, ImportOutcome, ReportService};

use crate::config::settings::Settings;
use crate::database::repositories::{
    ActivityLogRepository, EventRepository, ParticipantRepository, UserRepository,
};
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService<UserRepository>,
    pub event_service: EventService<EventRepository, ParticipantRepository>,
    pub report_service: ReportService<EventRepository, ParticipantRepository>,
    pub admin_service: AdminService<UserRepository, ActivityLogRepository>,
    pub notification_service: NotificationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        let auth_service = AuthService::new(database.users.clone(), settings);
        let event_service =
            EventService::new(database.events.clone(), database.participants.clone());
        let report_service = ReportService::new(event_service.clone());
        let admin_service =
            AdminService::new(database.users.clone(), database.activity_log.clone());
        let notification_service = NotificationService::new();

        Self {
            auth_service,
            event_service,
            report_service,
            admin_service,
            notification_service,
        }
    }
}
