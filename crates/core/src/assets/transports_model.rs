//! Transport payloads.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{impl_container_contained_fields, ContainerContainedFields};
use crate::errors::{Result, ValidationError};

/// A file system transport: publishes into a directory on the server.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemTransport {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub directory: Option<String>,
}

impl FileSystemTransport {
    pub fn set_directory(&mut self, directory: &str) -> Result<()> {
        if directory.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the directory").into());
        }
        self.directory = Some(directory.to_string());
        Ok(())
    }
}

/// An FTP/SFTP transport.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FtpTransport {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub host_name: Option<String>,
    pub port: Option<i32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub directory: Option<String>,
    #[serde(rename = "doSFTP")]
    pub do_sftp: Option<bool>,
    #[serde(rename = "doPASV")]
    pub do_pasv: Option<bool>,
}

/// A database transport.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTransport {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub server_name: Option<String>,
    pub server_port: Option<i32>,
    pub database_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub transport_site_id: Option<String>,
}

impl_container_contained_fields!(FileSystemTransport, FtpTransport, DatabaseTransport);
