//! Page payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_folder_contained_fields, DublinAwareFields, ExpiringFields, FolderContainedFields,
    PublishableFields,
};
use crate::assets::structured_data_model::StructuredData;
use crate::errors::{Result, ValidationError};

/// A page: either structured data shaped by the content type's data
/// definition, or raw XHTML.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    #[serde(flatten)]
    pub publishable: PublishableFields,
    pub content_type_id: Option<String>,
    pub content_type_path: Option<String>,
    pub configuration_set_id: Option<String>,
    pub configuration_set_path: Option<String>,
    pub structured_data: Option<StructuredData>,
    pub xhtml: Option<String>,
    pub link: Option<String>,
    pub maintain_absolute_links: Option<bool>,
}

impl Page {
    /// Whether the page content is shaped by a data definition.
    pub fn has_structured_data(&self) -> bool {
        self.structured_data.is_some()
    }

    /// Sets the text of a top-level structured-data node.
    pub fn set_text(&mut self, node_identifier: &str, text: &str) -> Result<()> {
        let data = self.structured_data.as_mut().ok_or_else(|| {
            ValidationError::InvalidInput(
                "the page has no structured data to set text on".to_string(),
            )
        })?;
        let node = data.node_mut(node_identifier).ok_or_else(|| {
            ValidationError::InvalidInput(format!("no such node: {node_identifier}"))
        })?;
        node.text = Some(text.to_string());
        Ok(())
    }

    pub fn set_xhtml(&mut self, xhtml: &str) -> Result<()> {
        if self.structured_data.is_some() {
            return Err(ValidationError::InvalidInput(
                "the page is data-definition backed; edit its structured data instead".to_string(),
            )
            .into());
        }
        self.xhtml = Some(xhtml.to_string());
        Ok(())
    }
}

impl_folder_contained_fields!(Page);
