//! Asset identifiers and the entity-type table.
//!
//! An [`Identifier`] is the externally-visible key for any asset: the
//! entity type plus either a 32-digit hex id or a path (site-scoped types
//! also need a site name when addressed by path). The same structure is
//! what the service returns for container children, subscribers and search
//! matches, so it carries the optional `recycled` flag those listings
//! include.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::{Error, Result, ValidationError};

lazy_static! {
    /// The service assigns 32-digit lowercase hex ids.
    static ref ASSET_ID_REGEX: Regex =
        Regex::new(r"^[0-9a-f]{32}$").expect("Invalid regex pattern");
}

/// One row per entity type the service knows about: the wire type string
/// and the property name under which the asset payload is keyed.
macro_rules! entity_types {
    ($( $variant:ident => ($type_str:literal, $property:literal) ),+ $(,)?) => {
        /// The closed set of entity types understood by the service.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum EntityType {
            $( #[serde(rename = $type_str)] $variant, )+
        }

        impl EntityType {
            /// The wire type string, e.g. `block_FEED`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( EntityType::$variant => $type_str, )+
                }
            }

            /// The property name the payload is keyed by, e.g. `feedBlock`.
            pub fn property_name(&self) -> &'static str {
                match self {
                    $( EntityType::$variant => $property, )+
                }
            }
        }

        impl FromStr for EntityType {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $type_str => Ok(EntityType::$variant), )+
                    other => Err(ValidationError::NoSuchType(other.to_string()).into()),
                }
            }
        }
    };
}

entity_types! {
    AssetFactory => ("assetfactory", "assetFactory"),
    AssetFactoryContainer => ("assetfactorycontainer", "assetFactoryContainer"),
    Block => ("block", "block"),
    FeedBlock => ("block_FEED", "feedBlock"),
    IndexBlock => ("block_INDEX", "indexBlock"),
    TextBlock => ("block_TEXT", "textBlock"),
    StructuredDataBlock => ("block_XHTML_DATADEFINITION", "xhtmlDataDefinitionBlock"),
    XmlBlock => ("block_XML", "xmlBlock"),
    TwitterFeedBlock => ("block_TWITTER_FEED", "twitterFeedBlock"),
    ConnectorContainer => ("connectorcontainer", "connectorContainer"),
    TwitterConnector => ("twitterconnector", "twitterConnector"),
    FacebookConnector => ("facebookconnector", "facebookConnector"),
    WordPressConnector => ("wordpressconnector", "wordPressConnector"),
    GoogleAnalyticsConnector => ("googleanalyticsconnector", "googleAnalyticsConnector"),
    ContentType => ("contenttype", "contentType"),
    ContentTypeContainer => ("contenttypecontainer", "contentTypeContainer"),
    Destination => ("destination", "destination"),
    EditorConfiguration => ("editorconfiguration", "editorConfiguration"),
    File => ("file", "file"),
    Folder => ("folder", "folder"),
    Group => ("group", "group"),
    Message => ("message", "message"),
    MetadataSet => ("metadataset", "metadataSet"),
    MetadataSetContainer => ("metadatasetcontainer", "metadataSetContainer"),
    Page => ("page", "page"),
    PageConfigurationSet => ("pageconfigurationset", "pageConfigurationSet"),
    PageConfigurationSetContainer => ("pageconfigurationsetcontainer", "pageConfigurationSetContainer"),
    PublishSet => ("publishset", "publishSet"),
    PublishSetContainer => ("publishsetcontainer", "publishSetContainer"),
    Reference => ("reference", "reference"),
    Role => ("role", "role"),
    DataDefinition => ("datadefinition", "dataDefinition"),
    DataDefinitionContainer => ("datadefinitioncontainer", "dataDefinitionContainer"),
    Format => ("format", "format"),
    XsltFormat => ("format_XSLT", "xsltFormat"),
    ScriptFormat => ("format_SCRIPT", "scriptFormat"),
    Site => ("site", "site"),
    SiteDestinationContainer => ("sitedestinationcontainer", "siteDestinationContainer"),
    Symlink => ("symlink", "symlink"),
    Target => ("target", "target"),
    Template => ("template", "template"),
    Transport => ("transport", "transport"),
    FileSystemTransport => ("transport_fs", "fileSystemTransport"),
    FtpTransport => ("transport_ftp", "ftpTransport"),
    DatabaseTransport => ("transport_db", "databaseTransport"),
    TransportContainer => ("transportcontainer", "transportContainer"),
    User => ("user", "user"),
    Workflow => ("workflow", "workflow"),
    WorkflowDefinition => ("workflowdefinition", "workflowDefinition"),
    WorkflowDefinitionContainer => ("workflowdefinitioncontainer", "workflowDefinitionContainer"),
    WorkflowEmail => ("workflowemail", "workflowEmail"),
    WorkflowEmailContainer => ("workflowemailcontainer", "workflowEmailContainer"),
}

impl EntityType {
    /// Whether path addressing for this type needs a site name. Users,
    /// groups, roles, sites, targets and messages live outside any site.
    pub fn requires_site_name(&self) -> bool {
        !matches!(
            self,
            EntityType::Group
                | EntityType::Message
                | EntityType::Role
                | EntityType::Site
                | EntityType::Target
                | EntityType::User
        )
    }

    /// Whether this type is a container (its payload is a bare child list).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            EntityType::AssetFactoryContainer
                | EntityType::ConnectorContainer
                | EntityType::ContentTypeContainer
                | EntityType::DataDefinitionContainer
                | EntityType::MetadataSetContainer
                | EntityType::PageConfigurationSetContainer
                | EntityType::PublishSetContainer
                | EntityType::SiteDestinationContainer
                | EntityType::TransportContainer
                | EntityType::WorkflowDefinitionContainer
                | EntityType::WorkflowEmailContainer
        )
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The path portion of an identifier.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetPath {
    pub path: String,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
}

impl AssetPath {
    pub fn new(path: impl Into<String>) -> Self {
        AssetPath {
            path: path.into(),
            ..AssetPath::default()
        }
    }

    pub fn with_site_name(path: impl Into<String>, site_name: impl Into<String>) -> Self {
        AssetPath {
            path: path.into(),
            site_id: None,
            site_name: Some(site_name.into()),
        }
    }
}

/// Addresses one asset: entity type plus id or path.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path: Option<AssetPath>,
    /// Present on container children and recycle-bin listings.
    #[serde(default)]
    pub recycled: Option<bool>,
}

/// Returns true for the 32-digit hex strings the service uses as ids.
pub fn is_hex_id(candidate: &str) -> bool {
    ASSET_ID_REGEX.is_match(candidate)
}

impl Identifier {
    /// Addresses an asset by its service-assigned id.
    pub fn from_id(entity_type: EntityType, id: impl Into<String>) -> Self {
        Identifier {
            entity_type,
            id: Some(id.into()),
            path: None,
            recycled: None,
        }
    }

    /// Addresses an asset by path within a site.
    pub fn from_path(entity_type: EntityType, path: AssetPath) -> Self {
        Identifier {
            entity_type,
            id: None,
            path: Some(path),
            recycled: None,
        }
    }

    /// Builds an identifier from a string that is either a hex id or a
    /// path. Paths for site-scoped types must carry a site name.
    pub fn of(
        entity_type: EntityType,
        id_or_path: &str,
        site_name: Option<&str>,
    ) -> Result<Self> {
        if is_hex_id(id_or_path) {
            return Ok(Identifier::from_id(entity_type, id_or_path));
        }
        match site_name {
            Some(site) => Ok(Identifier::from_path(
                entity_type,
                AssetPath::with_site_name(id_or_path, site),
            )),
            None if entity_type.requires_site_name() => {
                Err(ValidationError::MissingSiteName(entity_type.to_string()).into())
            }
            None => Ok(Identifier::from_path(
                entity_type,
                AssetPath::new(id_or_path),
            )),
        }
    }

    /// The id if known, otherwise the path; used in log and error text.
    pub fn address(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        match &self.path {
            Some(p) => match &p.site_name {
                Some(site) => format!("{}:{}", site, p.path),
                None => p.path.clone(),
            },
            None => String::from("<unaddressed>"),
        }
    }

    /// Back-fills identity fields the caller did not supply from the
    /// retrieved property, so later operations can address the asset by
    /// either id or path.
    pub fn reconcile(
        &mut self,
        id: Option<&str>,
        path: Option<&str>,
        site_id: Option<&str>,
        site_name: Option<&str>,
    ) {
        if self.id.is_none() {
            if let Some(id) = id {
                self.id = Some(id.to_string());
            }
        }
        if let Some(path) = path {
            if self.path.is_none() {
                self.path = Some(AssetPath::new(path));
            }
        }
        if let Some(existing) = self.path.as_mut() {
            if existing.site_id.is_none() {
                existing.site_id = site_id.map(str::to_string);
            }
            if existing.site_name.is_none() {
                existing.site_name = site_name.map(str::to_string);
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity_type, self.address())
    }
}
