//! Property structures shared across asset types.

mod acl_model;
mod audits_model;
mod metadata_model;
mod tags_model;
mod workflow_model;

#[cfg(test)]
mod audits_model_tests;

pub use acl_model::{AccessRightsInformation, AclEntry, AclEntryType, AclLevel};
pub use audits_model::{Audit, AuditType};
pub use metadata_model::{DynamicField, FieldValue, Metadata};
pub use tags_model::{add_tag, add_tags, has_tag, remove_tag, Tag};
pub use workflow_model::{WorkflowConfiguration, WorkflowStepConfiguration};
