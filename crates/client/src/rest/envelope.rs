//! Wire envelopes of the REST API.
//!
//! Every response carries a `success` flag and, on failure, a free-form
//! `message`. Read-style operations add their payload next to the flag.
//! List payloads tolerate the one-or-many collapsing of older renderings
//! (see `cascade_ws_core::utils::shapes`).

use serde::Deserialize;

use cascade_ws_core::assets::AssetProperty;
use cascade_ws_core::identifier::Identifier;
use cascade_ws_core::properties::{AccessRightsInformation, Audit};
use cascade_ws_core::utils::shapes::normalized_list;

/// The bare success/message envelope of mutating operations.
#[derive(Debug, Deserialize)]
pub(crate) struct OperationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Read response: the envelope plus the tagged asset payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ReadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub asset: Option<AssetProperty>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_asset_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListSubscribersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub subscribers: Vec<Identifier>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuditsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub audits: Vec<Audit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadAccessRightsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_rights_information: Option<AccessRightsInformation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub matches: Vec<Identifier>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListSitesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub sites: Vec<Identifier>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckOutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub working_copy_identifier: Option<Identifier>,
}

/// Uniform view used by the generic success check.
pub(crate) trait Enveloped {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_enveloped {
    ($( $response:ty ),+ $(,)?) => {
        $(
            impl Enveloped for $response {
                fn success(&self) -> bool {
                    self.success
                }
                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )+
    };
}

impl_enveloped!(
    OperationResponse,
    ReadResponse,
    CreateResponse,
    ListSubscribersResponse,
    AuditsResponse,
    ReadAccessRightsResponse,
    SearchResponse,
    ListSitesResponse,
    CheckOutResponse,
);
