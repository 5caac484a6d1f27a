//! Request parameter structures for the generic remote operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::identifier::{EntityType, Identifier};
use crate::properties::AuditType;

/// The generic remote operations every asset method delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Read,
    Edit,
    Create,
    Delete,
    Copy,
    Move,
    Publish,
    Unpublish,
    ListSubscribers,
    ReadAudits,
    ReadAccessRights,
    EditAccessRights,
    Search,
    ListSites,
    CheckOut,
    CheckIn,
    MarkMessage,
}

impl Operation {
    /// The operation's path segment in the service URL.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Edit => "edit",
            Operation::Create => "create",
            Operation::Delete => "delete",
            Operation::Copy => "copy",
            Operation::Move => "move",
            Operation::Publish => "publish",
            Operation::Unpublish => "unpublish",
            Operation::ListSubscribers => "listSubscribers",
            Operation::ReadAudits => "audit",
            Operation::ReadAccessRights => "readAccessRights",
            Operation::EditAccessRights => "editAccessRights",
            Operation::Search => "search",
            Operation::ListSites => "listSites",
            Operation::CheckOut => "checkOut",
            Operation::CheckIn => "checkIn",
            Operation::MarkMessage => "markMessage",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Parameters for the copy operation.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyParameters {
    pub destination_container_identifier: Identifier,
    pub new_name: String,
    pub do_workflow: Option<bool>,
}

/// Parameters for the move operation, which also handles renames.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveParameters {
    pub destination_container_identifier: Option<Identifier>,
    pub new_name: Option<String>,
    pub do_workflow: Option<bool>,
    pub un_publish: Option<bool>,
}

impl MoveParameters {
    /// A pure rename within the current container.
    pub fn rename(new_name: impl Into<String>) -> Self {
        MoveParameters {
            new_name: Some(new_name.into()),
            ..MoveParameters::default()
        }
    }

    /// A move into another container, keeping the name.
    pub fn into_container(destination: Identifier) -> Self {
        MoveParameters {
            destination_container_identifier: Some(destination),
            ..MoveParameters::default()
        }
    }
}

/// Audit query: an asset addressed by identifier, or a user/group/role
/// addressed by name, optionally narrowed to one audit type.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuditParameters {
    pub identifier: Option<Identifier>,
    pub username: Option<String>,
    pub groupname: Option<String>,
    pub rolename: Option<String>,
    pub audit_type: Option<AuditType>,
}

/// Fields the search operation can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Name,
    Path,
    Content,
    Metadata,
    Title,
    Summary,
    Teaser,
    Keywords,
    Description,
    Author,
    DisplayName,
}

/// Parameters for the search operation.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformation {
    pub search_terms: String,
    pub site_id: Option<String>,
    pub site_name: Option<String>,
    pub search_fields: Option<Vec<SearchField>>,
    pub search_types: Option<Vec<EntityType>>,
}

impl SearchInformation {
    pub fn new(search_terms: impl Into<String>) -> Self {
        SearchInformation {
            search_terms: search_terms.into(),
            site_id: None,
            site_name: None,
            search_fields: None,
            search_types: None,
        }
    }

    pub fn in_site(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn of_types(mut self, types: impl IntoIterator<Item = EntityType>) -> Self {
        self.search_types = Some(types.into_iter().collect());
        self
    }
}

/// How to mark a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageMark {
    Read,
    Unread,
}

impl MessageMark {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageMark::Read => "read",
            MessageMark::Unread => "unread",
        }
    }
}
