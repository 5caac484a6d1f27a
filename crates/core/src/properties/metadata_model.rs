//! Wired metadata: the Dublin Core fields plus dynamic fields.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::shapes::normalized_list;

/// The metadata block carried by dublin-aware assets.
///
/// All wired fields are optional; which ones the server actually persists
/// is governed by the asset's metadata set.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub author: Option<String>,
    pub display_name: Option<String>,
    pub end_date: Option<String>,
    pub keywords: Option<String>,
    pub meta_description: Option<String>,
    pub review_date: Option<String>,
    pub start_date: Option<String>,
    pub summary: Option<String>,
    pub teaser: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub dynamic_fields: Vec<DynamicField>,
}

impl Metadata {
    /// Returns the dynamic field with this name, if the metadata set
    /// defines one.
    pub fn dynamic_field(&self, name: &str) -> Option<&DynamicField> {
        self.dynamic_fields.iter().find(|f| f.name == name)
    }

    pub fn dynamic_field_mut(&mut self, name: &str) -> Option<&mut DynamicField> {
        self.dynamic_fields.iter_mut().find(|f| f.name == name)
    }
}

/// One dynamic field, named by its metadata-set definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicField {
    pub name: String,
    #[serde(default, deserialize_with = "normalized_list")]
    pub field_values: Vec<FieldValue>,
}

impl DynamicField {
    /// The non-empty values of this field.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.field_values.iter().filter_map(|v| v.value.as_deref())
    }

    /// Replaces all values of this field.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_values = values
            .into_iter()
            .map(|v| FieldValue {
                value: Some(v.into()),
            })
            .collect();
    }
}

/// A single value of a dynamic field.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub value: Option<String>,
}
