//! The REST transport.
//!
//! URL forms, per the service's v1 API:
//!
//! - by id:   `{endpoint}/api/v1/{operation}/{type}/{id}`
//! - by path: `{endpoint}/api/v1/{operation}/{type}/{siteName}/{path}`
//!   (global types omit the site name)
//!
//! Requests authenticate with HTTP Basic credentials from the
//! [`CascadeConfig`].

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::json;

use cascade_ws_core::assets::AssetProperty;
use cascade_ws_core::errors::{Error, OperationError, Result, ValidationError};
use cascade_ws_core::identifier::Identifier;
use cascade_ws_core::operations::{
    AssetOperations, AuditParameters, CopyParameters, MessageMark, MoveParameters, Operation,
    SearchInformation,
};
use cascade_ws_core::properties::{AccessRightsInformation, Audit};

use crate::config::CascadeConfig;
use crate::rest::envelope::{
    AuditsResponse, CheckOutResponse, CreateResponse, Enveloped, ListSitesResponse,
    ListSubscribersResponse, OperationResponse, ReadAccessRightsResponse, ReadResponse,
    SearchResponse,
};

/// REST implementation of [`AssetOperations`].
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    config: CascadeConfig,
}

impl RestClient {
    pub fn new(config: CascadeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Transport(format!("failed to initialize HTTP client: {e}")))?;

        let base_url = config.endpoint().as_str().trim_end_matches('/').to_string();
        Ok(RestClient {
            client,
            base_url,
            config,
        })
    }

    /// Builds the URL addressing one asset for the given operation.
    fn asset_url(&self, operation: Operation, identifier: &Identifier) -> Result<String> {
        let prefix = format!(
            "{}/api/v1/{}/{}",
            self.base_url,
            operation.path(),
            identifier.entity_type.as_str()
        );

        if let Some(id) = &identifier.id {
            return Ok(format!("{prefix}/{id}"));
        }

        let path = identifier.path.as_ref().ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "the identifier for {} carries neither id nor path",
                identifier.entity_type
            ))
        })?;

        let mut url = prefix;
        if let Some(site) = &path.site_name {
            url.push('/');
            url.push_str(&urlencoding::encode(site));
        }
        for segment in path.path.split('/').filter(|s| !s.is_empty()) {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        Ok(url)
    }

    fn operation_url(&self, operation: Operation) -> String {
        format!("{}/api/v1/{}", self.base_url, operation.path())
    }

    fn ensure_enabled(&self, operation: Operation) -> Result<()> {
        if self.config.is_disabled(operation) {
            return Err(OperationError::Disabled(operation).into());
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("[CascadeRest] GET {url}");
        let response = self
            .client
            .get(url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;
        self.parse_response(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        debug!("[CascadeRest] POST {url}");
        let mut request = self
            .client
            .post(url)
            .basic_auth(self.config.username(), Some(self.config.password()));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;
        self.parse_response(response).await
    }

    /// Reads the body and parses the envelope, surfacing HTTP failures
    /// with a trimmed excerpt of whatever came back.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<OperationResponse>(&body) {
                if let Some(message) = envelope.message {
                    return Err(Error::Transport(format!("HTTP {status}: {message}")));
                }
            }
            return Err(Error::Transport(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::UnexpectedResponse(format!(
                "failed to parse response: {e} - {}",
                body.chars().take(200).collect::<String>()
            ))
        })
    }

    /// Maps a false success flag to the operation's error variant.
    fn ensure_success<T: Enveloped>(operation: Operation, response: &T) -> Result<()> {
        if response.success() {
            return Ok(());
        }
        let message = response
            .message()
            .unwrap_or("the service reported a failure without a message")
            .to_string();
        let error = match operation {
            Operation::Edit => OperationError::EditFailed(message),
            Operation::Create => OperationError::CreateFailed(message),
            Operation::Copy => OperationError::CopyFailed(message),
            Operation::Delete => OperationError::DeleteFailed(message),
            Operation::Move => OperationError::MoveFailed(message),
            Operation::Publish | Operation::Unpublish => OperationError::PublishFailed(message),
            operation => OperationError::Failed { operation, message },
        };
        Err(error.into())
    }
}

#[async_trait]
impl AssetOperations for RestClient {
    async fn read(&self, identifier: &Identifier) -> Result<AssetProperty> {
        self.ensure_enabled(Operation::Read)?;
        let url = self.asset_url(Operation::Read, identifier)?;
        let response: ReadResponse = self.get(&url).await?;

        if !response.success {
            return Err(OperationError::AssetNotFound {
                property_name: identifier.entity_type.property_name().to_string(),
                address: identifier.address(),
                message: response
                    .message
                    .unwrap_or_else(|| "the service reported a failure".to_string()),
            }
            .into());
        }
        response.asset.ok_or_else(|| {
            Error::UnexpectedResponse("read succeeded but returned no asset".to_string())
        })
    }

    async fn edit(&self, property: &AssetProperty) -> Result<()> {
        self.ensure_enabled(Operation::Edit)?;
        let identifier = identifier_of(property)?;
        let url = self.asset_url(Operation::Edit, &identifier)?;
        let body = json!({ "asset": property });
        let response: OperationResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::Edit, &response)
    }

    async fn create(&self, property: &AssetProperty) -> Result<String> {
        self.ensure_enabled(Operation::Create)?;
        let url = self.operation_url(Operation::Create);
        let body = json!({ "asset": property });
        let response: CreateResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::Create, &response)?;
        response.created_asset_id.ok_or_else(|| {
            Error::UnexpectedResponse("create succeeded but returned no id".to_string())
        })
    }

    async fn delete(&self, identifier: &Identifier) -> Result<()> {
        self.ensure_enabled(Operation::Delete)?;
        let url = self.asset_url(Operation::Delete, identifier)?;
        let response: OperationResponse = self.post(&url, None).await?;
        Self::ensure_success(Operation::Delete, &response)
    }

    async fn copy(&self, identifier: &Identifier, parameters: &CopyParameters) -> Result<()> {
        self.ensure_enabled(Operation::Copy)?;
        let url = self.asset_url(Operation::Copy, identifier)?;
        let body = json!({ "copyParameters": parameters });
        let response: OperationResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::Copy, &response)
    }

    async fn move_asset(
        &self,
        identifier: &Identifier,
        parameters: &MoveParameters,
    ) -> Result<()> {
        self.ensure_enabled(Operation::Move)?;
        let url = self.asset_url(Operation::Move, identifier)?;
        let body = json!({ "moveParameters": parameters });
        let response: OperationResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::Move, &response)
    }

    async fn publish(&self, identifier: &Identifier, destinations: &[Identifier]) -> Result<()> {
        self.ensure_enabled(Operation::Publish)?;
        let url = self.asset_url(Operation::Publish, identifier)?;
        let body = publish_body(destinations, false);
        let response: OperationResponse = self.post(&url, body).await?;
        Self::ensure_success(Operation::Publish, &response)
    }

    async fn unpublish(&self, identifier: &Identifier, destinations: &[Identifier]) -> Result<()> {
        self.ensure_enabled(Operation::Unpublish)?;
        let url = self.asset_url(Operation::Unpublish, identifier)?;
        let body = publish_body(destinations, true);
        let response: OperationResponse = self.post(&url, body).await?;
        Self::ensure_success(Operation::Unpublish, &response)
    }

    async fn list_subscribers(&self, identifier: &Identifier) -> Result<Vec<Identifier>> {
        self.ensure_enabled(Operation::ListSubscribers)?;
        let url = self.asset_url(Operation::ListSubscribers, identifier)?;
        let response: ListSubscribersResponse = self.get(&url).await?;
        Self::ensure_success(Operation::ListSubscribers, &response)?;
        Ok(response.subscribers)
    }

    async fn read_audits(&self, parameters: &AuditParameters) -> Result<Vec<Audit>> {
        self.ensure_enabled(Operation::ReadAudits)?;
        let url = match &parameters.identifier {
            Some(identifier) => self.asset_url(Operation::ReadAudits, identifier)?,
            None => self.operation_url(Operation::ReadAudits),
        };
        let mut query = Vec::new();
        if let Some(audit_type) = parameters.audit_type {
            query.push(format!("auditType={}", audit_type.as_str()));
        }
        if let Some(username) = &parameters.username {
            query.push(format!("username={}", urlencoding::encode(username)));
        }
        if let Some(groupname) = &parameters.groupname {
            query.push(format!("groupname={}", urlencoding::encode(groupname)));
        }
        if let Some(rolename) = &parameters.rolename {
            query.push(format!("rolename={}", urlencoding::encode(rolename)));
        }
        let url = if query.is_empty() {
            url
        } else {
            format!("{url}?{}", query.join("&"))
        };
        let response: AuditsResponse = self.get(&url).await?;
        Self::ensure_success(Operation::ReadAudits, &response)?;
        Ok(response.audits)
    }

    async fn read_access_rights(
        &self,
        identifier: &Identifier,
    ) -> Result<AccessRightsInformation> {
        self.ensure_enabled(Operation::ReadAccessRights)?;
        let url = self.asset_url(Operation::ReadAccessRights, identifier)?;
        let response: ReadAccessRightsResponse = self.get(&url).await?;
        Self::ensure_success(Operation::ReadAccessRights, &response)?;
        response.access_rights_information.ok_or_else(|| {
            Error::UnexpectedResponse(
                "readAccessRights succeeded but returned no information".to_string(),
            )
        })
    }

    async fn edit_access_rights(
        &self,
        information: &AccessRightsInformation,
        apply_to_children: bool,
    ) -> Result<()> {
        self.ensure_enabled(Operation::EditAccessRights)?;
        let url = self.asset_url(Operation::EditAccessRights, &information.identifier)?;
        let body = json!({
            "accessRightsInformation": information,
            "applyToChildren": apply_to_children,
        });
        let response: OperationResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::EditAccessRights, &response)
    }

    async fn search(&self, information: &SearchInformation) -> Result<Vec<Identifier>> {
        self.ensure_enabled(Operation::Search)?;
        let url = self.operation_url(Operation::Search);
        let body = json!({ "searchInformation": information });
        let response: SearchResponse = self.post(&url, Some(body)).await?;
        Self::ensure_success(Operation::Search, &response)?;
        Ok(response.matches)
    }

    async fn list_sites(&self) -> Result<Vec<Identifier>> {
        self.ensure_enabled(Operation::ListSites)?;
        let url = self.operation_url(Operation::ListSites);
        let response: ListSitesResponse = self.get(&url).await?;
        Self::ensure_success(Operation::ListSites, &response)?;
        Ok(response.sites)
    }

    async fn check_out(&self, identifier: &Identifier) -> Result<Option<Identifier>> {
        self.ensure_enabled(Operation::CheckOut)?;
        let url = self.asset_url(Operation::CheckOut, identifier)?;
        let response: CheckOutResponse = self.post(&url, None).await?;
        Self::ensure_success(Operation::CheckOut, &response)?;
        Ok(response.working_copy_identifier)
    }

    async fn check_in(&self, identifier: &Identifier, comments: Option<&str>) -> Result<()> {
        self.ensure_enabled(Operation::CheckIn)?;
        let mut url = self.asset_url(Operation::CheckIn, identifier)?;
        if let Some(comments) = comments {
            url = format!("{url}?comments={}", urlencoding::encode(comments));
        }
        let response: OperationResponse = self.post(&url, None).await?;
        Self::ensure_success(Operation::CheckIn, &response)
    }

    async fn mark_message(&self, identifier: &Identifier, mark: MessageMark) -> Result<()> {
        self.ensure_enabled(Operation::MarkMessage)?;
        let url = format!(
            "{}?markType={}",
            self.asset_url(Operation::MarkMessage, identifier)?,
            mark.as_str()
        );
        let response: OperationResponse = self.post(&url, None).await?;
        Self::ensure_success(Operation::MarkMessage, &response)
    }
}

/// Edits address the asset through its property; the property must know
/// its own id.
fn identifier_of(property: &AssetProperty) -> Result<Identifier> {
    let id = property.id().ok_or_else(|| {
        ValidationError::InvalidInput(format!(
            "the {} carries no id to address the edit by",
            property.property_name()
        ))
    })?;
    Ok(Identifier::from_id(property.entity_type(), id))
}

fn publish_body(destinations: &[Identifier], unpublish: bool) -> Option<serde_json::Value> {
    if destinations.is_empty() && !unpublish {
        return None;
    }
    Some(json!({
        "publishInformation": {
            "destinations": destinations,
            "unpublish": unpublish,
        }
    }))
}
