//! Block payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_folder_contained_fields, DublinAwareFields, ExpiringFields, FolderContainedFields,
};
use crate::assets::structured_data_model::StructuredData;
use crate::errors::{Result, ValidationError};

/// A feed block: renders the XML fetched from a feed URL.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    #[serde(rename = "feedURL")]
    pub feed_url: Option<String>,
}

impl FeedBlock {
    pub fn set_feed_url(&mut self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the feed URL").into());
        }
        self.feed_url = Some(url.to_string());
        Ok(())
    }
}

/// Whether an index block walks a folder or collects by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexBlockType {
    #[serde(rename = "folder")]
    Folder,
    #[serde(rename = "content-type")]
    ContentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    Alphabetical,
    FolderOrder,
    LastModifiedDate,
    CreatedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// An index block: renders an XML index of a subtree or content type.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IndexBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    pub index_block_type: Option<IndexBlockType>,
    pub indexed_folder_id: Option<String>,
    pub indexed_folder_path: Option<String>,
    pub indexed_content_type_id: Option<String>,
    pub indexed_content_type_path: Option<String>,
    pub indexed_folder_recycled: Option<bool>,
    pub max_rendered_assets: Option<i32>,
    pub depth_of_index: Option<i32>,
    pub rendering_behavior: Option<String>,
    pub index_pages: Option<bool>,
    pub index_blocks: Option<bool>,
    pub index_links: Option<bool>,
    pub index_files: Option<bool>,
    pub index_regular_content: Option<bool>,
    pub index_system_metadata: Option<bool>,
    pub index_user_metadata: Option<bool>,
    pub index_access_rights: Option<bool>,
    pub index_user_info: Option<bool>,
    pub index_workflow_info: Option<bool>,
    pub append_calling_page_data: Option<bool>,
    pub sort_method: Option<SortMethod>,
    pub sort_order: Option<SortOrder>,
    #[serde(rename = "pageXML")]
    pub page_xml: Option<String>,
}

impl IndexBlock {
    pub fn is_folder_index(&self) -> bool {
        self.index_block_type == Some(IndexBlockType::Folder)
    }

    pub fn is_content_type_index(&self) -> bool {
        self.index_block_type == Some(IndexBlockType::ContentType)
    }
}

/// A text block.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    pub text: Option<String>,
}

impl TextBlock {
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the text").into());
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// An XML block.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct XmlBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    pub xml: Option<String>,
}

impl XmlBlock {
    pub fn set_xml(&mut self, xml: &str) -> Result<()> {
        if xml.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the XML").into());
        }
        self.xml = Some(xml.to_string());
        Ok(())
    }
}

/// A structured-data block: content shaped by a data definition, or raw
/// XHTML when no definition is assigned.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    pub structured_data: Option<StructuredData>,
    pub xhtml: Option<String>,
}

impl StructuredDataBlock {
    /// Whether the block is backed by a data definition.
    pub fn has_structured_data(&self) -> bool {
        self.structured_data.is_some()
    }
}

/// A twitter feed block.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TwitterFeedBlock {
    #[serde(flatten)]
    pub folder_contained: FolderContainedFields,
    #[serde(flatten)]
    pub dublin: DublinAwareFields,
    #[serde(flatten)]
    pub expiring: ExpiringFields,
    pub account_name: Option<String>,
    pub search_string: Option<String>,
    pub max_results: Option<i32>,
    pub use_defaults: Option<bool>,
    pub exclude_jquery: Option<bool>,
}

impl_folder_contained_fields!(
    FeedBlock,
    IndexBlock,
    TextBlock,
    XmlBlock,
    StructuredDataBlock,
    TwitterFeedBlock,
);
