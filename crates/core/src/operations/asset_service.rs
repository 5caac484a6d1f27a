//! High-level asset flows over any [`AssetOperations`] transport.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;

use crate::assets::{Asset, AssetProperty};
use crate::errors::{OperationError, Result, ValidationError};
use crate::identifier::{EntityType, Identifier};
use crate::operations::operations_model::{
    AuditParameters, CopyParameters, MessageMark, MoveParameters, SearchInformation,
};
use crate::operations::operations_traits::AssetOperations;
use crate::properties::{AccessRightsInformation, Audit, AuditType};

/// Convenience flows composed from the generic operations.
///
/// The service owns no state beyond the transport handle; every call goes
/// to the server. In particular an asset's property is re-fetched after
/// every edit: the client never trusts its local copy past a mutation.
pub struct AssetService<O: AssetOperations> {
    operations: Arc<O>,
}

impl<O: AssetOperations> AssetService<O> {
    pub fn new(operations: Arc<O>) -> Self {
        AssetService { operations }
    }

    /// The underlying transport, for operations not wrapped here.
    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// Retrieves an asset and binds it to its identifier.
    pub async fn get(&self, identifier: Identifier) -> Result<Asset> {
        let property = self.operations.read(&identifier).await?;
        Ok(Asset::new(identifier, property))
    }

    /// Retrieves an asset addressed by id or path.
    pub async fn get_by(
        &self,
        entity_type: EntityType,
        id_or_path: &str,
        site_name: Option<&str>,
    ) -> Result<Asset> {
        self.get(Identifier::of(entity_type, id_or_path, site_name)?)
            .await
    }

    /// Re-fetches the asset's property from the server.
    pub async fn reload(&self, asset: &mut Asset) -> Result<()> {
        let property = self.operations.read(asset.identifier()).await?;
        asset.replace_property(property);
        Ok(())
    }

    /// Writes the asset's property back, then re-fetches it so the local
    /// copy reflects what the server actually stored.
    pub async fn edit(&self, asset: &mut Asset) -> Result<()> {
        self.operations.edit(asset.property()).await?;
        self.reload(asset).await
    }

    /// Creates a new asset from a property and retrieves it.
    pub async fn create(&self, property: AssetProperty) -> Result<Asset> {
        let entity_type = property.entity_type();
        let id = self.operations.create(&property).await?;
        debug!("created {} {}", entity_type, id);
        self.get(Identifier::from_id(entity_type, id)).await
    }

    /// Deletes the asset.
    pub async fn delete(&self, asset: Asset) -> Result<()> {
        self.operations.delete(asset.identifier()).await
    }

    /// Copies the asset into a container under a new name and returns the
    /// new asset.
    ///
    /// The copy response carries no id, so the parent is re-read and the
    /// new child located by name.
    pub async fn copy(&self, asset: &Asset, parent: &Asset, new_name: &str) -> Result<Asset> {
        if new_name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let parameters = CopyParameters {
            destination_container_identifier: parent.identifier().clone(),
            new_name: new_name.to_string(),
            do_workflow: Some(false),
        };
        self.operations.copy(asset.identifier(), &parameters).await?;

        let parent_property = self.operations.read(parent.identifier()).await?;
        let child = parent_property
            .children()
            .and_then(|children| {
                children.iter().find(|child| {
                    child
                        .path
                        .as_ref()
                        .map(|p| p.path.rsplit('/').next() == Some(new_name))
                        .unwrap_or(false)
                })
            })
            .cloned()
            .ok_or_else(|| {
                OperationError::CopyFailed(format!(
                    "the copy succeeded but {new_name} was not found under {}",
                    parent.identifier().address()
                ))
            })?;

        self.get(child).await
    }

    /// Moves the asset into another container.
    pub async fn move_to(&self, asset: &mut Asset, destination: &Asset) -> Result<()> {
        self.operations
            .move_asset(
                asset.identifier(),
                &MoveParameters::into_container(destination.identifier().clone()),
            )
            .await?;
        self.reload(asset).await
    }

    /// Renames the asset in place.
    pub async fn rename(&self, asset: &mut Asset, new_name: &str) -> Result<()> {
        if new_name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        // The identifier may only know the old path; address by id after
        // the reconcile that get() performed.
        self.operations
            .move_asset(asset.identifier(), &MoveParameters::rename(new_name))
            .await?;
        let id = asset
            .id()
            .ok_or_else(|| ValidationError::InvalidInput("the asset has no id".to_string()))?
            .to_string();
        let refreshed = self
            .get(Identifier::from_id(asset.entity_type(), id))
            .await?;
        *asset = refreshed;
        Ok(())
    }

    /// Publishes the asset, to one destination or to all of them.
    pub async fn publish(&self, asset: &Asset, destination: Option<&Identifier>) -> Result<()> {
        let destinations: Vec<Identifier> = destination.cloned().into_iter().collect();
        self.operations
            .publish(asset.identifier(), &destinations)
            .await
    }

    /// Unpublishes the asset, from one destination or from all of them.
    pub async fn unpublish(&self, asset: &Asset, destination: Option<&Identifier>) -> Result<()> {
        let destinations: Vec<Identifier> = destination.cloned().into_iter().collect();
        self.operations
            .unpublish(asset.identifier(), &destinations)
            .await
    }

    /// The identifiers of all assets subscribing to this one.
    pub async fn subscribers(&self, asset: &Asset) -> Result<Vec<Identifier>> {
        self.operations.list_subscribers(asset.identifier()).await
    }

    /// Publishes every subscriber of the asset, one at a time.
    pub async fn publish_subscribers(
        &self,
        asset: &Asset,
        destination: Option<&Identifier>,
    ) -> Result<()> {
        let destinations: Vec<Identifier> = destination.cloned().into_iter().collect();
        let subscribers = self.subscribers(asset).await?;
        debug!(
            "publishing {} subscribers of {}",
            subscribers.len(),
            asset.identifier()
        );
        for subscriber in &subscribers {
            self.operations.publish(subscriber, &destinations).await?;
        }
        Ok(())
    }

    /// Audit entries for the asset, optionally narrowed by type and time
    /// window, newest last. Users, groups and roles are audited by name.
    pub async fn audits(
        &self,
        asset: &Asset,
        audit_type: Option<AuditType>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<Audit>> {
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if end < start {
                return Err(ValidationError::EndBeforeStart.into());
            }
        }

        let mut parameters = AuditParameters {
            audit_type,
            ..AuditParameters::default()
        };
        match asset.entity_type() {
            EntityType::User => parameters.username = asset.name().map(str::to_string),
            EntityType::Group => parameters.groupname = asset.name().map(str::to_string),
            EntityType::Role => parameters.rolename = asset.name().map(str::to_string),
            entity_type => {
                let id = asset.id().ok_or_else(|| {
                    ValidationError::InvalidInput("the asset has no id".to_string())
                })?;
                parameters.identifier = Some(Identifier::from_id(entity_type, id));
            }
        }

        let mut audits = self.operations.read_audits(&parameters).await?;
        // The service ignores time windows; filter here.
        audits.retain(|audit| {
            start_time.is_none_or(|start| audit.date >= start)
                && end_time.is_none_or(|end| audit.date <= end)
        });
        audits.sort_by_key(|audit| audit.date);
        Ok(audits)
    }

    /// Access rights of the asset.
    pub async fn access_rights(&self, asset: &Asset) -> Result<AccessRightsInformation> {
        self.operations.read_access_rights(asset.identifier()).await
    }

    /// Writes access rights back.
    pub async fn set_access_rights(
        &self,
        information: &AccessRightsInformation,
        apply_to_children: bool,
    ) -> Result<()> {
        self.operations
            .edit_access_rights(information, apply_to_children)
            .await
    }

    /// Full-text search across the instance.
    pub async fn search(&self, information: &SearchInformation) -> Result<Vec<Identifier>> {
        self.operations.search(information).await
    }

    /// Identifiers of every site.
    pub async fn sites(&self) -> Result<Vec<Identifier>> {
        self.operations.list_sites().await
    }

    /// Checks a page or file out for exclusive editing.
    pub async fn check_out(&self, asset: &Asset) -> Result<Option<Identifier>> {
        self.operations.check_out(asset.identifier()).await
    }

    /// Checks a page or file back in.
    pub async fn check_in(&self, asset: &Asset, comments: Option<&str>) -> Result<()> {
        self.operations.check_in(asset.identifier(), comments).await
    }

    /// Marks a message read or unread.
    pub async fn mark_message(&self, message: &Asset, mark: MessageMark) -> Result<()> {
        if message.entity_type() != EntityType::Message {
            return Err(ValidationError::WrongAssetType {
                expected: "message",
                actual: message.entity_type().to_string(),
            }
            .into());
        }
        self.operations.mark_message(message.identifier(), mark).await
    }
}
