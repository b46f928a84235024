//! Admin service
//!
//! User management for admins: role and status edits plus deletion, each
//! recorded in the append-only activity log.

use crate::database::store::{ActivityLogStore, UserStore};
use crate::models::activity_log::{ActivityLogEntry, CreateActivityLogRequest};
use crate::models::user::{Role, UpdateUserRequest, User};
use crate::utils::errors::{GadTrackError, Result};
use crate::utils::logging::log_admin_action;

#[derive(Debug, Clone)]
pub struct AdminService<U, L> {
    users: U,
    activity_log: L,
}

impl<U: UserStore, L: ActivityLogStore> AdminService<U, L> {
    pub fn new(users: U, activity_log: L) -> Self {
        Self { users, activity_log }
    }

    async fn require_admin(&self, acting_user_id: i64) -> Result<User> {
        let user = self
            .users
            .find_user_by_id(acting_user_id)
            .await?
            .ok_or(GadTrackError::UserNotFound {
                user_id: acting_user_id,
            })?;
        if user.role != Role::Admin.as_str() {
            return Err(GadTrackError::PermissionDenied(
                "Admin role required".to_string(),
            ));
        }
        Ok(user)
    }

    pub async fn list_users(&self, acting_user_id: i64) -> Result<Vec<User>> {
        self.require_admin(acting_user_id).await?;
        self.users.list_users().await
    }

    /// Edit a user's name, role, or active status
    pub async fn update_user(
        &self,
        acting_user_id: i64,
        target_user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<User> {
        self.require_admin(acting_user_id).await?;

        if self
            .users
            .find_user_by_id(target_user_id)
            .await?
            .is_none()
        {
            return Err(GadTrackError::UserNotFound {
                user_id: target_user_id,
            });
        }

        let user = self.users.update_user(target_user_id, &request).await?;

        self.log_action(
            acting_user_id,
            "user.update",
            format!("updated user {target_user_id}"),
        )
        .await?;

        Ok(user)
    }

    /// Delete a user account
    pub async fn delete_user(&self, acting_user_id: i64, target_user_id: i64) -> Result<()> {
        self.require_admin(acting_user_id).await?;

        let target = self
            .users
            .find_user_by_id(target_user_id)
            .await?
            .ok_or(GadTrackError::UserNotFound {
                user_id: target_user_id,
            })?;

        self.users.delete_user(target_user_id).await?;

        self.log_action(
            acting_user_id,
            "user.delete",
            format!("deleted user {} ({})", target_user_id, target.email),
        )
        .await?;

        Ok(())
    }

    /// Read the most recent audit-trail entries
    pub async fn recent_activity(
        &self,
        acting_user_id: i64,
        limit: i64,
    ) -> Result<Vec<ActivityLogEntry>> {
        self.require_admin(acting_user_id).await?;
        self.activity_log.list_recent_activity(limit).await
    }

    async fn log_action(&self, user_id: i64, action: &str, details: String) -> Result<()> {
        log_admin_action(user_id, action, None, Some(&details));
        self.activity_log
            .append_activity(&CreateActivityLogRequest {
                user_id,
                action: action.to_string(),
                details: Some(details),
            })
            .await?;
        Ok(())
    }
}
