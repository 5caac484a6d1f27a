//! Messages and legacy targets.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::PropertyFields;

/// An inbox message. Global; addressed by id only.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
}

impl PropertyFields for Message {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

/// A legacy target. Kept for reads against older servers.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub parent_target_id: Option<String>,
    pub parent_target_path: Option<String>,
    pub base_folder_id: Option<String>,
    pub base_folder_path: Option<String>,
}

impl PropertyFields for Target {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
