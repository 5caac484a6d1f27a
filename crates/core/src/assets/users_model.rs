//! User, group and role payloads.
//!
//! These are global assets: none carries a path or a site, and each keeps
//! its name under a different key (`username`, `groupName`, `name`). The
//! uniform accessors paper over that.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::PropertyFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    Normal,
    Ldap,
    Custom,
}

/// A user account.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub auth_type: Option<AuthType>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
    /// Semicolon-separated group list, as wired.
    pub groups: Option<String>,
    pub default_group: Option<String>,
    pub role: Option<String>,
    pub default_site_id: Option<String>,
    pub default_site_name: Option<String>,
}

impl User {
    /// The groups the user belongs to, split out of the wire form.
    pub fn group_names(&self) -> Vec<&str> {
        self.groups
            .as_deref()
            .map(|g| g.split(';').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

impl PropertyFields for User {
    fn name(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// A group of users.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_name: Option<String>,
    /// Semicolon-separated member list, as wired.
    pub users: Option<String>,
    pub role: Option<String>,
}

impl Group {
    pub fn member_names(&self) -> Vec<&str> {
        self.users
            .as_deref()
            .map(|u| u.split(';').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn has_member(&self, username: &str) -> bool {
        self.member_names().contains(&username)
    }
}

impl PropertyFields for Group {
    fn name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Global,
    Site,
}

/// A role. Global roles carry `global_abilities`; site roles carry
/// `site_abilities`; the other field is null.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role_type: Option<RoleType>,
    pub global_abilities: Option<GlobalAbilities>,
    pub site_abilities: Option<SiteAbilities>,
}

impl Role {
    pub fn is_global(&self) -> bool {
        self.role_type == Some(RoleType::Global)
    }

    pub fn is_site(&self) -> bool {
        self.role_type == Some(RoleType::Site)
    }
}

impl PropertyFields for Role {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Abilities of a global role.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAbilities {
    pub bypass_all_permissions_checks: Option<bool>,
    pub access_site_management: Option<bool>,
    pub access_admin_area: Option<bool>,
    pub access_security_area: Option<bool>,
    pub access_audits: Option<bool>,
    pub access_configuration: Option<bool>,
    pub broadcast_messages: Option<bool>,
    pub change_identity: Option<bool>,
    pub create_users: Option<bool>,
    pub create_groups: Option<bool>,
    pub create_roles: Option<bool>,
    pub delete_all_users: Option<bool>,
    pub delete_all_groups: Option<bool>,
    pub edit_any_user: Option<bool>,
    pub edit_any_group: Option<bool>,
    pub edit_system_preferences: Option<bool>,
    pub force_logout: Option<bool>,
    pub view_all_users: Option<bool>,
    pub view_all_groups: Option<bool>,
    pub view_system_info_and_logs: Option<bool>,
}

/// Abilities of a site role.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteAbilities {
    pub bypass_all_permissions_checks: Option<bool>,
    pub bypass_workflow: Option<bool>,
    pub bypass_asset_factory_groups_new_menu: Option<bool>,
    pub bypass_destination_groups_when_publishing: Option<bool>,
    pub access_manage_site_area: Option<bool>,
    pub access_asset_factories: Option<bool>,
    pub access_configuration_sets: Option<bool>,
    pub access_data_definitions: Option<bool>,
    pub access_metadata_sets: Option<bool>,
    pub access_publish_sets: Option<bool>,
    pub access_destinations: Option<bool>,
    pub access_transports: Option<bool>,
    pub access_workflow_definitions: Option<bool>,
    pub access_content_types: Option<bool>,
    pub access_audits: Option<bool>,
    pub activate_delete_versions: Option<bool>,
    pub assign_approve_workflow_steps: Option<bool>,
    pub assign_workflows_to_folders: Option<bool>,
    pub break_locks: Option<bool>,
    pub delete_workflows: Option<bool>,
    pub edit_access_rights: Option<bool>,
    pub edit_data_definition: Option<bool>,
    pub edit_page_content_type: Option<bool>,
    pub edit_page_level_configurations: Option<bool>,
    pub move_rename_assets: Option<bool>,
    pub multi_select_copy: Option<bool>,
    pub multi_select_delete: Option<bool>,
    pub multi_select_move: Option<bool>,
    pub multi_select_publish: Option<bool>,
    pub publish_readable_home_assets: Option<bool>,
    pub publish_writable_home_assets: Option<bool>,
    pub upload_images_from_wysiwyg: Option<bool>,
    pub view_versions: Option<bool>,
}
