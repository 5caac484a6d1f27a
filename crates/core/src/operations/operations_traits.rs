//! The contract every transport implementation fulfils.
//!
//! Implementations perform the network I/O; everything above them (the
//! asset handle, the service flows) is transport-agnostic. The REST
//! binding in the client crate is the production implementation; tests
//! use in-memory fakes.

use async_trait::async_trait;

use crate::assets::AssetProperty;
use crate::errors::Result;
use crate::identifier::Identifier;
use crate::operations::operations_model::{
    AuditParameters, CopyParameters, MessageMark, MoveParameters, SearchInformation,
};
use crate::properties::{AccessRightsInformation, Audit};

/// The generic remote operations of the service.
///
/// Methods that mutate server state resolve to `Ok(())` only when the
/// service reported success; a false success flag surfaces as
/// [`OperationError`](crate::errors::OperationError) carrying the
/// service's message.
#[async_trait]
pub trait AssetOperations: Send + Sync {
    /// Retrieves the property of the addressed asset.
    async fn read(&self, identifier: &Identifier) -> Result<AssetProperty>;

    /// Writes the property back. The caller is responsible for re-reading
    /// afterwards; [`AssetService::edit`](crate::operations::AssetService::edit)
    /// does both.
    async fn edit(&self, property: &AssetProperty) -> Result<()>;

    /// Creates a new asset from the property and returns its new id.
    async fn create(&self, property: &AssetProperty) -> Result<String>;

    /// Deletes the addressed asset.
    async fn delete(&self, identifier: &Identifier) -> Result<()>;

    /// Copies the addressed asset into a container under a new name. The
    /// service does not report the new asset's id.
    async fn copy(&self, identifier: &Identifier, parameters: &CopyParameters) -> Result<()>;

    /// Moves and/or renames the addressed asset.
    async fn move_asset(&self, identifier: &Identifier, parameters: &MoveParameters)
        -> Result<()>;

    /// Publishes the addressed asset to the given destinations, or to all
    /// of them when none are given.
    async fn publish(&self, identifier: &Identifier, destinations: &[Identifier]) -> Result<()>;

    /// Removes the addressed asset from the given destinations, or from
    /// all of them when none are given.
    async fn unpublish(&self, identifier: &Identifier, destinations: &[Identifier]) -> Result<()>;

    /// Lists the assets subscribing to the addressed asset.
    async fn list_subscribers(&self, identifier: &Identifier) -> Result<Vec<Identifier>>;

    /// Reads audit entries for an asset or a named user/group/role.
    async fn read_audits(&self, parameters: &AuditParameters) -> Result<Vec<Audit>>;

    /// Reads the access rights of the addressed asset.
    async fn read_access_rights(&self, identifier: &Identifier)
        -> Result<AccessRightsInformation>;

    /// Writes access rights, optionally pushing them down to children.
    async fn edit_access_rights(
        &self,
        information: &AccessRightsInformation,
        apply_to_children: bool,
    ) -> Result<()>;

    /// Full-text search across the instance.
    async fn search(&self, information: &SearchInformation) -> Result<Vec<Identifier>>;

    /// Lists every site of the instance.
    async fn list_sites(&self) -> Result<Vec<Identifier>>;

    /// Checks a page or file out; returns the working-copy identifier the
    /// service allocated, if any.
    async fn check_out(&self, identifier: &Identifier) -> Result<Option<Identifier>>;

    /// Checks a page or file back in.
    async fn check_in(&self, identifier: &Identifier, comments: Option<&str>) -> Result<()>;

    /// Marks a message read or unread.
    async fn mark_message(&self, identifier: &Identifier, mark: MessageMark) -> Result<()>;
}
