//! Assets module - typed payloads per entity type, the tagged payload
//! enum, and the asset handle.

mod asset_model;
mod blocks_model;
mod common_model;
mod connectors_model;
mod content_model;
mod files_model;
mod folders_model;
mod formats_model;
mod messages_model;
mod pages_model;
mod property;
mod sites_model;
mod structured_data_model;
mod transports_model;
mod users_model;
mod workflow_defs_model;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod asset_model_tests;

pub use asset_model::Asset;
pub use blocks_model::{
    FeedBlock, IndexBlock, IndexBlockType, SortMethod, SortOrder, StructuredDataBlock, TextBlock,
    TwitterFeedBlock, XmlBlock,
};
pub use common_model::{
    ContainerContainedFields, DublinAwareFields, ExpiringFields, FolderContainedFields,
    PropertyFields, PublishableFields,
};
pub use connectors_model::{Connector, ConnectorContentTypeLink, ConnectorParameter};
pub use content_model::{
    AssetFactory, ContentType, DataDefinition, DynamicFieldType, DynamicMetadataFieldDefinition,
    EditorConfiguration, MetadataSet, PageConfiguration, PageConfigurationSet, PossibleValue,
    PublishSet,
};
pub use files_model::{File, Reference, Symlink};
pub use folders_model::{Container, Folder};
pub use formats_model::{PageRegion, ScriptFormat, Template, XsltFormat};
pub use messages_model::{Message, Target};
pub use pages_model::Page;
pub use property::AssetProperty;
pub use sites_model::{Destination, Site};
pub use structured_data_model::{StructuredData, StructuredDataNode, StructuredDataNodeType};
pub use transports_model::{DatabaseTransport, FileSystemTransport, FtpTransport};
pub use users_model::{AuthType, GlobalAbilities, Group, Role, RoleType, SiteAbilities, User};
pub use workflow_defs_model::{
    Workflow, WorkflowAction, WorkflowDefinition, WorkflowEmail, WorkflowStep,
};
