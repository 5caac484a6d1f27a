//! The asset payload: one variant per entity type, keyed on the wire by
//! property name exactly as the service's `asset` envelope is.
//!
//! Every container entity type shares the [`Container`] payload, and all
//! four connector types share [`Connector`]; the variant, not the payload
//! shape, preserves which entity type the asset is.

use serde::{Deserialize, Serialize};

use crate::assets::blocks_model::{
    FeedBlock, IndexBlock, StructuredDataBlock, TextBlock, TwitterFeedBlock, XmlBlock,
};
use crate::assets::common_model::PropertyFields;
use crate::assets::connectors_model::Connector;
use crate::assets::content_model::{
    AssetFactory, ContentType, DataDefinition, EditorConfiguration, MetadataSet,
    PageConfigurationSet, PublishSet,
};
use crate::assets::files_model::{File, Reference, Symlink};
use crate::assets::folders_model::{Container, Folder};
use crate::assets::formats_model::{ScriptFormat, Template, XsltFormat};
use crate::assets::messages_model::{Message, Target};
use crate::assets::pages_model::Page;
use crate::assets::sites_model::{Destination, Site};
use crate::assets::transports_model::{DatabaseTransport, FileSystemTransport, FtpTransport};
use crate::assets::users_model::{Group, Role, User};
use crate::assets::workflow_defs_model::{Workflow, WorkflowDefinition, WorkflowEmail};
use crate::identifier::EntityType;
use crate::properties::Tag;

/// One row per payload variant: the variant name doubles as the
/// [`EntityType`] variant, the literal is the wire property name.
macro_rules! asset_properties {
    ($( $variant:ident ( $payload:ty ) => $property:literal ),+ $(,)?) => {
        /// A typed asset payload, tagged by property name on the wire.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum AssetProperty {
            $( #[serde(rename = $property)] $variant($payload), )+
        }

        impl AssetProperty {
            /// The entity type this payload belongs to.
            pub fn entity_type(&self) -> EntityType {
                match self {
                    $( AssetProperty::$variant(_) => EntityType::$variant, )+
                }
            }

            fn fields(&self) -> &dyn PropertyFields {
                match self {
                    $( AssetProperty::$variant(p) => p, )+
                }
            }

            fn fields_mut(&mut self) -> &mut dyn PropertyFields {
                match self {
                    $( AssetProperty::$variant(p) => p, )+
                }
            }
        }
    };
}

asset_properties! {
    AssetFactory(AssetFactory) => "assetFactory",
    AssetFactoryContainer(Container) => "assetFactoryContainer",
    FeedBlock(FeedBlock) => "feedBlock",
    IndexBlock(IndexBlock) => "indexBlock",
    TextBlock(TextBlock) => "textBlock",
    StructuredDataBlock(StructuredDataBlock) => "xhtmlDataDefinitionBlock",
    XmlBlock(XmlBlock) => "xmlBlock",
    TwitterFeedBlock(TwitterFeedBlock) => "twitterFeedBlock",
    ConnectorContainer(Container) => "connectorContainer",
    TwitterConnector(Connector) => "twitterConnector",
    FacebookConnector(Connector) => "facebookConnector",
    WordPressConnector(Connector) => "wordPressConnector",
    GoogleAnalyticsConnector(Connector) => "googleAnalyticsConnector",
    ContentType(ContentType) => "contentType",
    ContentTypeContainer(Container) => "contentTypeContainer",
    Destination(Destination) => "destination",
    EditorConfiguration(EditorConfiguration) => "editorConfiguration",
    File(File) => "file",
    Folder(Folder) => "folder",
    Group(Group) => "group",
    Message(Message) => "message",
    MetadataSet(MetadataSet) => "metadataSet",
    MetadataSetContainer(Container) => "metadataSetContainer",
    Page(Page) => "page",
    PageConfigurationSet(PageConfigurationSet) => "pageConfigurationSet",
    PageConfigurationSetContainer(Container) => "pageConfigurationSetContainer",
    PublishSet(PublishSet) => "publishSet",
    PublishSetContainer(Container) => "publishSetContainer",
    Reference(Reference) => "reference",
    Role(Role) => "role",
    DataDefinition(DataDefinition) => "dataDefinition",
    DataDefinitionContainer(Container) => "dataDefinitionContainer",
    XsltFormat(XsltFormat) => "xsltFormat",
    ScriptFormat(ScriptFormat) => "scriptFormat",
    Site(Site) => "site",
    SiteDestinationContainer(Container) => "siteDestinationContainer",
    Symlink(Symlink) => "symlink",
    Target(Target) => "target",
    Template(Template) => "template",
    FileSystemTransport(FileSystemTransport) => "fileSystemTransport",
    FtpTransport(FtpTransport) => "ftpTransport",
    DatabaseTransport(DatabaseTransport) => "databaseTransport",
    TransportContainer(Container) => "transportContainer",
    User(User) => "user",
    Workflow(Workflow) => "workflow",
    WorkflowDefinition(WorkflowDefinition) => "workflowDefinition",
    WorkflowDefinitionContainer(Container) => "workflowDefinitionContainer",
    WorkflowEmail(WorkflowEmail) => "workflowEmail",
    WorkflowEmailContainer(Container) => "workflowEmailContainer",
}

impl AssetProperty {
    /// The wire property name the payload is keyed by.
    pub fn property_name(&self) -> &'static str {
        self.entity_type().property_name()
    }

    // Uniform identity accessors. Payloads missing a field report `None`.

    pub fn id(&self) -> Option<&str> {
        self.fields().id()
    }

    pub fn name(&self) -> Option<&str> {
        self.fields().name()
    }

    pub fn path(&self) -> Option<&str> {
        self.fields().path()
    }

    pub fn site_id(&self) -> Option<&str> {
        self.fields().site_id()
    }

    pub fn site_name(&self) -> Option<&str> {
        self.fields().site_name()
    }

    /// Tags, for folder-contained payloads; `None` for everything else.
    pub fn tags(&self) -> Option<&Vec<Tag>> {
        self.fields().tags()
    }

    pub fn tags_mut(&mut self) -> Option<&mut Vec<Tag>> {
        self.fields_mut().tags_mut()
    }

    /// Child identifiers, for folders and containers.
    pub fn children(&self) -> Option<&[crate::identifier::Identifier]> {
        match self {
            AssetProperty::Folder(f) => Some(&f.children),
            AssetProperty::AssetFactoryContainer(c)
            | AssetProperty::ConnectorContainer(c)
            | AssetProperty::ContentTypeContainer(c)
            | AssetProperty::DataDefinitionContainer(c)
            | AssetProperty::MetadataSetContainer(c)
            | AssetProperty::PageConfigurationSetContainer(c)
            | AssetProperty::PublishSetContainer(c)
            | AssetProperty::SiteDestinationContainer(c)
            | AssetProperty::TransportContainer(c)
            | AssetProperty::WorkflowDefinitionContainer(c)
            | AssetProperty::WorkflowEmailContainer(c) => Some(&c.children),
            _ => None,
        }
    }
}
