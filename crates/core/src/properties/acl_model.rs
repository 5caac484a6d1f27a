//! Access rights as read and edited through the service.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::identifier::Identifier;
use crate::utils::shapes::normalized_list;

/// Permission level an entry grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclLevel {
    None,
    Read,
    Write,
}

/// Whether an entry names a user or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclEntryType {
    User,
    Group,
}

/// One grant in an asset's access-rights list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclEntry {
    pub level: AclLevel,
    #[serde(rename = "type")]
    pub entry_type: AclEntryType,
    pub name: String,
}

/// The full access-rights picture for one asset.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRightsInformation {
    pub identifier: Identifier,
    #[serde(default, deserialize_with = "normalized_list")]
    pub acl_entries: Vec<AclEntry>,
    /// The level granted to everyone not named in an entry.
    pub all_level: AclLevel,
}

impl AccessRightsInformation {
    /// The grant for a specific user or group, if present.
    pub fn entry(&self, entry_type: AclEntryType, name: &str) -> Option<&AclEntry> {
        self.acl_entries
            .iter()
            .find(|e| e.entry_type == entry_type && e.name == name)
    }

    /// Adds or replaces the grant for a user or group.
    pub fn grant(&mut self, entry_type: AclEntryType, name: &str, level: AclLevel) {
        if let Some(existing) = self
            .acl_entries
            .iter_mut()
            .find(|e| e.entry_type == entry_type && e.name == name)
        {
            existing.level = level;
            return;
        }
        self.acl_entries.push(AclEntry {
            level,
            entry_type,
            name: name.to_string(),
        });
    }

    /// Drops the grant for a user or group. Returns whether the list
    /// changed.
    pub fn revoke(&mut self, entry_type: AclEntryType, name: &str) -> bool {
        let before = self.acl_entries.len();
        self.acl_entries
            .retain(|e| !(e.entry_type == entry_type && e.name == name));
        self.acl_entries.len() != before
    }
}
