//! File, reference and symlink payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_folder_contained_fields, DublinAwareFields, ExpiringFields, FolderContainedFields,
    PublishableFields,
};
use crate::identifier::EntityType;

/// A file. Textual files round-trip through `text`; binary content rides
/// in `data` as the service's byte array.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    #[serde(flatten)]
    pub publishable: PublishableFields,
    pub text: Option<String>,
    pub data: Option<Vec<u8>>,
    pub rewrite_links: Option<bool>,
    pub maintain_absolute_links: Option<bool>,
}

/// A reference to another asset, placed in a folder.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    pub referenced_asset_id: Option<String>,
    pub referenced_asset_path: Option<String>,
    pub referenced_asset_type: Option<EntityType>,
}

/// A symlink to an external URL.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Symlink {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    #[serde(rename = "linkURL")]
    pub link_url: Option<String>,
}

impl_folder_contained_fields!(File, Reference, Symlink);
