//! Workflow configuration attached to edit requests.
//!
//! When an asset under workflow is edited, the edit request carries a
//! workflow configuration naming the definition to instantiate, a comment,
//! and optional per-step assignments.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utils::shapes::normalized_list;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfiguration {
    pub workflow_name: String,
    pub workflow_definition_id: Option<String>,
    pub workflow_definition_path: Option<String>,
    pub workflow_comments: String,
    #[serde(default, deserialize_with = "normalized_list")]
    pub workflow_step_configurations: Vec<WorkflowStepConfiguration>,
    pub end_date: Option<String>,
}

impl WorkflowConfiguration {
    /// Starts a named workflow from a definition id.
    pub fn for_definition_id(
        workflow_name: impl Into<String>,
        definition_id: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        WorkflowConfiguration {
            workflow_name: workflow_name.into(),
            workflow_definition_id: Some(definition_id.into()),
            workflow_comments: comments.into(),
            ..WorkflowConfiguration::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepConfiguration {
    pub step_identifier: String,
    pub step_assignment: String,
}
