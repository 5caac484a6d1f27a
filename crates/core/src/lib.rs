//! Cascade WS Core - typed object model for the Cascade CMS web services.
//!
//! This crate contains the asset payload types, the identifier model, and
//! the [`operations::AssetOperations`] contract the transport crate
//! implements. It performs no network I/O itself.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod identifier;
pub mod operations;
pub mod properties;
pub mod utils;

// Re-export the types nearly every caller touches
pub use assets::{Asset, AssetProperty};
pub use identifier::{AssetPath, EntityType, Identifier};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
