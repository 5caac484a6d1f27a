//! Identifier module - entity types and asset addressing.

mod identifier_model;

#[cfg(test)]
mod identifier_model_tests;

pub use identifier_model::{is_hex_id, AssetPath, EntityType, Identifier};
