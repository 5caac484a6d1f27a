//! Structured data: the node tree behind data-definition pages and blocks.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::shapes::normalized_list;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    pub definition_id: Option<String>,
    pub definition_path: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub structured_data_nodes: Vec<StructuredDataNode>,
}

impl StructuredData {
    /// Finds a top-level node by identifier.
    pub fn node(&self, identifier: &str) -> Option<&StructuredDataNode> {
        self.structured_data_nodes
            .iter()
            .find(|n| n.identifier.as_deref() == Some(identifier))
    }

    pub fn node_mut(&mut self, identifier: &str) -> Option<&mut StructuredDataNode> {
        self.structured_data_nodes
            .iter_mut()
            .find(|n| n.identifier.as_deref() == Some(identifier))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuredDataNodeType {
    Text,
    Group,
    Asset,
}

/// One node in the structured-data tree. Group nodes nest; asset nodes
/// point at a block, file, page or symlink.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataNode {
    #[serde(rename = "type")]
    pub node_type: StructuredDataNodeType,
    pub identifier: Option<String>,
    pub text: Option<String>,
    pub asset_type: Option<String>,
    pub block_id: Option<String>,
    pub block_path: Option<String>,
    pub file_id: Option<String>,
    pub file_path: Option<String>,
    pub page_id: Option<String>,
    pub page_path: Option<String>,
    pub symlink_id: Option<String>,
    pub symlink_path: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub structured_data_nodes: Vec<StructuredDataNode>,
}

impl StructuredDataNode {
    /// A text node with the given identifier and value.
    pub fn text(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        StructuredDataNode {
            node_type: StructuredDataNodeType::Text,
            identifier: Some(identifier.into()),
            text: Some(value.into()),
            asset_type: None,
            block_id: None,
            block_path: None,
            file_id: None,
            file_path: None,
            page_id: None,
            page_path: None,
            symlink_id: None,
            symlink_path: None,
            structured_data_nodes: Vec::new(),
        }
    }
}
