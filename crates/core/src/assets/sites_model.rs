//! Site and destination payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_container_contained_fields, ContainerContainedFields, PropertyFields,
};

/// A site. Sites are global assets addressed by name; the payload has no
/// path or parent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub default_metadata_set_id: Option<String>,
    pub default_metadata_set_path: Option<String>,
    pub site_asset_factory_container_id: Option<String>,
    pub site_asset_factory_container_path: Option<String>,
    pub site_starting_page_id: Option<String>,
    pub site_starting_page_path: Option<String>,
    pub site_starting_page_recycled: Option<bool>,
    pub recycle_bin_expiration: Option<String>,
    pub unpublish_on_expiration: Option<bool>,
    pub link_checker_enabled: Option<bool>,
    pub external_link_check_on_publish: Option<bool>,
}

impl PropertyFields for Site {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A publish destination inside a site-destination container.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub transport_id: Option<String>,
    pub transport_path: Option<String>,
    pub directory: Option<String>,
    pub enabled: Option<bool>,
    pub checked_by_default: Option<bool>,
    pub publish_ascii_only: Option<bool>,
    pub exclude_from_scheduled_publishing: Option<bool>,
    pub applicable_groups: Option<String>,
    pub web_url: Option<String>,
}

impl_container_contained_fields!(Destination);
