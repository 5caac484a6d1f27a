//! Operations module - the remote-operations contract and the high-level
//! asset service.

mod asset_service;
mod operations_model;
mod operations_traits;

#[cfg(test)]
mod asset_service_tests;

pub use asset_service::AssetService;
pub use operations_model::{
    AuditParameters, CopyParameters, MessageMark, MoveParameters, Operation, SearchField,
    SearchInformation,
};
pub use operations_traits::AssetOperations;
