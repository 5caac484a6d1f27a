//! Audit records returned by the read-audits operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;
use crate::utils::time_utils::deserialize_service_date;

/// The action kinds the service audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditType {
    Login,
    LoginFailed,
    Logout,
    StartWorkflow,
    AdvanceWorkflow,
    Edit,
    Copy,
    Create,
    Reference,
    Delete,
    DeleteUnpublish,
    CheckIn,
    CheckOut,
    ActivateVersion,
    RestoreVersion,
    Publish,
    Unpublish,
    Recycle,
    Restore,
    Move,
    Rename,
}

impl AuditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditType::Login => "login",
            AuditType::LoginFailed => "login_failed",
            AuditType::Logout => "logout",
            AuditType::StartWorkflow => "start_workflow",
            AuditType::AdvanceWorkflow => "advance_workflow",
            AuditType::Edit => "edit",
            AuditType::Copy => "copy",
            AuditType::Create => "create",
            AuditType::Reference => "reference",
            AuditType::Delete => "delete",
            AuditType::DeleteUnpublish => "delete_unpublish",
            AuditType::CheckIn => "check_in",
            AuditType::CheckOut => "check_out",
            AuditType::ActivateVersion => "activate_version",
            AuditType::RestoreVersion => "restore_version",
            AuditType::Publish => "publish",
            AuditType::Unpublish => "unpublish",
            AuditType::Recycle => "recycle",
            AuditType::Restore => "restore",
            AuditType::Move => "move",
            AuditType::Rename => "rename",
        }
    }
}

/// One audit entry: who did what to which asset, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub user: String,
    pub action: AuditType,
    pub identifier: Identifier,
    #[serde(deserialize_with = "deserialize_service_date")]
    pub date: DateTime<Utc>,
}
