//! Connector payloads.
//!
//! All four connector types share one wire shape apart from
//! service-specific parameters, which ride in the parameter list.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{impl_container_contained_fields, ContainerContainedFields};
use crate::utils::shapes::normalized_list;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorParameter {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorContentTypeLink {
    pub content_type_id: Option<String>,
    pub content_type_path: Option<String>,
    pub page_configuration_id: Option<String>,
    pub page_configuration_name: Option<String>,
}

/// Any external-service connector.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub url: Option<String>,
    pub verified: Option<bool>,
    pub auth1: Option<String>,
    pub auth2: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub connector_parameters: Vec<ConnectorParameter>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub connector_content_type_links: Vec<ConnectorContentTypeLink>,
}

impl Connector {
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.connector_parameters
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .and_then(|p| p.value.as_deref())
    }
}

impl_container_contained_fields!(Connector);
