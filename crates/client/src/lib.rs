//! Cascade WS Client - REST transport for the Cascade object model.
//!
//! Connects [`cascade_ws_core`]'s operations contract to a live instance:
//!
//! ```ignore
//! let config = CascadeConfig::from_env()?;
//! let service = AssetService::new(Arc::new(RestClient::new(config)?));
//! let mut page = service.get_by(EntityType::Page, "about/index", Some("www")).await?;
//! page.add_tag("news")?;
//! service.edit(&mut page).await?;
//! ```

pub mod config;
pub mod rest;

pub use config::CascadeConfig;
pub use rest::RestClient;

// Re-export the types callers touch on every call site.
pub use cascade_ws_core::assets::{Asset, AssetProperty};
pub use cascade_ws_core::errors::{Error, Result};
pub use cascade_ws_core::identifier::{AssetPath, EntityType, Identifier};
pub use cascade_ws_core::operations::{AssetOperations, AssetService, Operation};
