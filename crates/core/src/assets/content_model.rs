//! Administrative configuration payloads: content types, data
//! definitions, metadata sets, configuration sets, publish sets, asset
//! factories and editor configurations.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{impl_container_contained_fields, ContainerContainedFields};
use crate::assets::formats_model::PageRegion;
use crate::identifier::Identifier;
use crate::utils::shapes::normalized_list;

/// A content type: ties a configuration set, data definition and
/// metadata set together for pages.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub page_configuration_set_id: Option<String>,
    pub page_configuration_set_path: Option<String>,
    pub data_definition_id: Option<String>,
    pub data_definition_path: Option<String>,
    pub metadata_set_id: Option<String>,
    pub metadata_set_path: Option<String>,
    pub editor_configuration_id: Option<String>,
    pub editor_configuration_path: Option<String>,
}

/// A data definition: the XML schema for structured data.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataDefinition {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub xml: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicFieldType {
    Text,
    Radio,
    Checkbox,
    Dropdown,
    Multiselect,
}

/// One selectable value of a dynamic-field definition.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PossibleValue {
    pub value: Option<String>,
    pub selected_by_default: Option<bool>,
}

/// Definition of one dynamic metadata field.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicMetadataFieldDefinition {
    pub name: String,
    pub label: Option<String>,
    pub field_type: Option<DynamicFieldType>,
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub possible_values: Vec<PossibleValue>,
}

/// A metadata set: which wired fields apply plus the dynamic-field
/// definitions.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSet {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub author_field_required: Option<bool>,
    pub author_field_visibility: Option<String>,
    pub description_field_required: Option<bool>,
    pub description_field_visibility: Option<String>,
    pub display_name_field_required: Option<bool>,
    pub display_name_field_visibility: Option<String>,
    pub keywords_field_required: Option<bool>,
    pub keywords_field_visibility: Option<String>,
    pub title_field_required: Option<bool>,
    pub title_field_visibility: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub dynamic_metadata_field_definitions: Vec<DynamicMetadataFieldDefinition>,
}

impl MetadataSet {
    pub fn field_definition(&self, name: &str) -> Option<&DynamicMetadataFieldDefinition> {
        self.dynamic_metadata_field_definitions
            .iter()
            .find(|d| d.name == name)
    }
}

/// One output configuration of a configuration set.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageConfiguration {
    pub id: Option<String>,
    pub name: Option<String>,
    pub default_configuration: Option<bool>,
    pub template_id: Option<String>,
    pub template_path: Option<String>,
    pub extension: Option<String>,
    pub output_mime_type: Option<String>,
    pub include_xml_declaration: Option<bool>,
    pub publishable: Option<bool>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub page_regions: Vec<PageRegion>,
}

/// A page configuration set.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageConfigurationSet {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    #[serde(default, deserialize_with = "normalized_list")]
    pub page_configurations: Vec<PageConfiguration>,
}

impl PageConfigurationSet {
    pub fn default_configuration(&self) -> Option<&PageConfiguration> {
        self.page_configurations
            .iter()
            .find(|c| c.default_configuration == Some(true))
    }
}

/// A publish set: explicit lists of pages, files and folders published
/// together.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishSet {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    #[serde(default, deserialize_with = "normalized_list")]
    pub pages: Vec<Identifier>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub files: Vec<Identifier>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub folders: Vec<Identifier>,
}

/// An asset factory: the "new asset" menu entry with its placement rules.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetFactory {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub applicable_groups: Option<String>,
    pub asset_type: Option<String>,
    pub base_asset_id: Option<String>,
    pub base_asset_path: Option<String>,
    pub placement_folder_id: Option<String>,
    pub placement_folder_path: Option<String>,
    pub allow_subfolder_placement: Option<bool>,
    pub folder_placement_position: Option<i32>,
    pub overwrite: Option<bool>,
    pub rename_mode: Option<String>,
    pub workflow_mode: Option<String>,
    pub workflow_definition_id: Option<String>,
    pub workflow_definition_path: Option<String>,
}

/// A WYSIWYG editor configuration.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfiguration {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub xml: Option<String>,
}

impl_container_contained_fields!(
    ContentType,
    DataDefinition,
    MetadataSet,
    PageConfigurationSet,
    PublishSet,
    AssetFactory,
    EditorConfiguration,
);
