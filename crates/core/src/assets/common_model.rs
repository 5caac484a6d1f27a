//! Field groups shared by families of asset payloads.
//!
//! The service's schema layers these as an inheritance chain
//! (folder-contained → dublin-aware → expiring → publishable); here each
//! layer is a flattened struct so a payload declares exactly the layers
//! its wire shape carries.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::properties::{Metadata, Tag};
use crate::utils::shapes::normalized_list;

/// Identity and bookkeeping fields on every asset that lives in a folder.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FolderContainedFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub site_id: Option<String>,
    pub site_name: Option<String>,
    pub parent_folder_id: Option<String>,
    pub parent_folder_path: Option<String>,
    pub last_modified_date: Option<String>,
    pub last_modified_by: Option<String>,
    pub created_date: Option<String>,
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub tags: Vec<Tag>,
}

/// Identity fields on assets that live in an administrative container.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContainedFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub site_id: Option<String>,
    pub site_name: Option<String>,
    pub parent_container_id: Option<String>,
    pub parent_container_path: Option<String>,
}

/// The metadata layer of dublin-aware assets.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DublinAwareFields {
    pub metadata: Option<Metadata>,
    pub metadata_set_id: Option<String>,
    pub metadata_set_path: Option<String>,
}

/// The expiration-folder layer.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringFields {
    pub expiration_folder_id: Option<String>,
    pub expiration_folder_path: Option<String>,
    pub expiration_folder_recycled: Option<bool>,
}

/// The publish-control layer of publishable assets.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishableFields {
    pub should_be_published: Option<bool>,
    pub should_be_indexed: Option<bool>,
    pub last_published_date: Option<String>,
    pub last_published_by: Option<String>,
}

/// Uniform identity view over heterogeneous payload shapes.
///
/// Payloads that lack a field (users have no path, roles no site) simply
/// report `None`.
pub trait PropertyFields {
    fn id(&self) -> Option<&str> {
        None
    }
    fn name(&self) -> Option<&str> {
        None
    }
    fn path(&self) -> Option<&str> {
        None
    }
    fn site_id(&self) -> Option<&str> {
        None
    }
    fn site_name(&self) -> Option<&str> {
        None
    }
    /// The tag list, for folder-contained payloads.
    fn tags(&self) -> Option<&Vec<Tag>> {
        None
    }
    fn tags_mut(&mut self) -> Option<&mut Vec<Tag>> {
        None
    }
}

/// Implements [`PropertyFields`] for payloads embedding
/// [`FolderContainedFields`] under the given field name.
macro_rules! impl_folder_contained_fields {
    ($( $payload:ty ),+ $(,)?) => {
        $(
            impl crate::assets::common_model::PropertyFields for $payload {
                fn id(&self) -> Option<&str> {
                    self.folder_contained.id.as_deref()
                }
                fn name(&self) -> Option<&str> {
                    self.folder_contained.name.as_deref()
                }
                fn path(&self) -> Option<&str> {
                    self.folder_contained.path.as_deref()
                }
                fn site_id(&self) -> Option<&str> {
                    self.folder_contained.site_id.as_deref()
                }
                fn site_name(&self) -> Option<&str> {
                    self.folder_contained.site_name.as_deref()
                }
                fn tags(&self) -> Option<&Vec<crate::properties::Tag>> {
                    Some(&self.folder_contained.tags)
                }
                fn tags_mut(&mut self) -> Option<&mut Vec<crate::properties::Tag>> {
                    Some(&mut self.folder_contained.tags)
                }
            }
        )+
    };
}

/// Implements [`PropertyFields`] for payloads embedding
/// [`ContainerContainedFields`].
macro_rules! impl_container_contained_fields {
    ($( $payload:ty ),+ $(,)?) => {
        $(
            impl crate::assets::common_model::PropertyFields for $payload {
                fn id(&self) -> Option<&str> {
                    self.contained.id.as_deref()
                }
                fn name(&self) -> Option<&str> {
                    self.contained.name.as_deref()
                }
                fn path(&self) -> Option<&str> {
                    self.contained.path.as_deref()
                }
                fn site_id(&self) -> Option<&str> {
                    self.contained.site_id.as_deref()
                }
                fn site_name(&self) -> Option<&str> {
                    self.contained.site_name.as_deref()
                }
            }
        )+
    };
}

pub(crate) use impl_container_contained_fields;
pub(crate) use impl_folder_contained_fields;
