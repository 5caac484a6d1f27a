//! Folder and container payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_container_contained_fields, impl_folder_contained_fields, ContainerContainedFields,
    DublinAwareFields, ExpiringFields, FolderContainedFields, PublishableFields,
};
use crate::identifier::Identifier;
use crate::utils::shapes::normalized_list;

/// A folder. Children are identifiers of the assets placed directly in it.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    #[serde(flatten)]
    pub publishable: PublishableFields,
    #[serde(default, deserialize_with = "normalized_list")]
    pub children: Vec<Identifier>,
}

/// Any administrative container: the shape is identical for every
/// container entity type, only the type string differs.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    #[serde(default, deserialize_with = "normalized_list")]
    pub children: Vec<Identifier>,
}

impl_folder_contained_fields!(Folder);
impl_container_contained_fields!(Container);
