//! Format and template payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{impl_folder_contained_fields, FolderContainedFields};
use crate::errors::{Result, ValidationError};
use crate::utils::shapes::normalized_list;

/// An XSLT format.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct XsltFormat {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    pub xml: Option<String>,
}

impl XsltFormat {
    pub fn set_xml(&mut self, xml: &str) -> Result<()> {
        if xml.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the XML").into());
        }
        self.xml = Some(xml.to_string());
        Ok(())
    }
}

/// A script (Velocity) format.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScriptFormat {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    pub script: Option<String>,
}

impl ScriptFormat {
    pub fn set_script(&mut self, script: &str) -> Result<()> {
        if script.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the script").into());
        }
        self.script = Some(script.to_string());
        Ok(())
    }
}

/// A region of a template that a block or format can be attached to.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageRegion {
    pub id: Option<String>,
    pub name: Option<String>,
    pub block_id: Option<String>,
    pub block_path: Option<String>,
    pub format_id: Option<String>,
    pub format_path: Option<String>,
    pub no_block: Option<bool>,
    pub no_format: Option<bool>,
}

/// A template: the XML skeleton pages render through, with its regions.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    pub format_id: Option<String>,
    pub format_path: Option<String>,
    pub xml: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub page_regions: Vec<PageRegion>,
}

impl Template {
    /// Finds a region by name.
    pub fn page_region(&self, name: &str) -> Option<&PageRegion> {
        self.page_regions
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
    }
}

impl_folder_contained_fields!(XsltFormat, ScriptFormat, Template);
