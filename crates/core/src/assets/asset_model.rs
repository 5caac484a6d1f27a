//! The asset handle: an identifier bound to its retrieved property.

use crate::errors::{Result, ValidationError};
use crate::identifier::{EntityType, Identifier};
use crate::properties::{add_tag, has_tag, remove_tag, Tag};
use crate::assets::property::AssetProperty;

/// One asset as the client sees it: the identifier it was addressed by
/// and the property the service returned for it.
///
/// The property is the only source of truth; it is refreshed from the
/// server after every edit (see
/// [`AssetService::edit`](crate::operations::AssetService::edit)). On
/// construction, identity fields the caller did not supply are back-filled
/// into the identifier from the property, so the asset stays addressable
/// by both id and path.
#[derive(Debug, Clone)]
pub struct Asset {
    identifier: Identifier,
    property: AssetProperty,
}

impl Asset {
    /// Binds an identifier to a freshly retrieved property and reconciles
    /// the identifier's identity fields.
    pub fn new(mut identifier: Identifier, property: AssetProperty) -> Self {
        identifier.reconcile(
            property.id(),
            property.path(),
            property.site_id(),
            property.site_name(),
        );
        Asset {
            identifier,
            property,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn entity_type(&self) -> EntityType {
        self.identifier.entity_type
    }

    pub fn property(&self) -> &AssetProperty {
        &self.property
    }

    pub fn property_mut(&mut self) -> &mut AssetProperty {
        &mut self.property
    }

    pub fn into_property(self) -> AssetProperty {
        self.property
    }

    /// Replaces the property with a re-fetched one and re-reconciles.
    pub fn replace_property(&mut self, property: AssetProperty) {
        self.identifier.reconcile(
            property.id(),
            property.path(),
            property.site_id(),
            property.site_name(),
        );
        self.property = property;
    }

    // Uniform accessors, falling back to the identifier where the
    // property shape lacks the field.

    pub fn id(&self) -> Option<&str> {
        self.property.id().or(self.identifier.id.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.property.name()
    }

    pub fn path(&self) -> Option<&str> {
        self.property
            .path()
            .or_else(|| self.identifier.path.as_ref().map(|p| p.path.as_str()))
    }

    pub fn site_id(&self) -> Option<&str> {
        self.property
            .site_id()
            .or_else(|| self.identifier.path.as_ref()?.site_id.as_deref())
    }

    pub fn site_name(&self) -> Option<&str> {
        self.property
            .site_name()
            .or_else(|| self.identifier.path.as_ref()?.site_name.as_deref())
    }

    // Tag convenience, available on folder-contained assets.

    fn tags_mut(&mut self) -> Result<&mut Vec<Tag>> {
        self.property.tags_mut().ok_or_else(|| {
            ValidationError::WrongAssetType {
                expected: "tag-bearing asset",
                actual: self.identifier.entity_type.to_string(),
            }
            .into()
        })
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.property
            .tags()
            .is_some_and(|tags| has_tag(tags, name))
    }

    /// Adds a tag locally; call `edit` to persist.
    pub fn add_tag(&mut self, name: &str) -> Result<()> {
        add_tag(self.tags_mut()?, name);
        Ok(())
    }

    pub fn add_tags<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = self.tags_mut()?;
        for name in names {
            add_tag(tags, name.as_ref());
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, name: &str) -> Result<()> {
        remove_tag(self.tags_mut()?, name);
        Ok(())
    }

    pub fn remove_tags<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = self.tags_mut()?;
        for name in names {
            remove_tag(tags, name.as_ref());
        }
        Ok(())
    }

    pub fn remove_all_tags(&mut self) -> Result<()> {
        self.tags_mut()?.clear();
        Ok(())
    }
}
