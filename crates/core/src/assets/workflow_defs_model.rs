//! Workflow assets: definitions, emails and running instances.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::assets::common_model::{
    impl_container_contained_fields, ContainerContainedFields, PropertyFields,
};
use crate::constants;
use crate::errors::{Result, ValidationError};
use crate::identifier::Identifier;
use crate::utils::shapes::normalized_list;

/// A workflow definition: the XML description of steps plus triggers.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub applicable_groups: Option<String>,
    pub copy: Option<bool>,
    pub create: Option<bool>,
    pub delete: Option<bool>,
    pub edit: Option<bool>,
    pub naming_behavior: Option<String>,
    pub xml: Option<String>,
    pub completed_workflow_emails: Option<String>,
    pub cancelled_workflow_emails: Option<String>,
}

/// A workflow email template. Subject and body may use the placeholder
/// keys in [`crate::constants`].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEmail {
    #[serde(flatten)]
    pub contained: ContainerContainedFields,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl WorkflowEmail {
    pub fn set_subject(&mut self, subject: &str) -> Result<()> {
        if subject.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the subject").into());
        }
        self.subject = Some(subject.to_string());
        Ok(())
    }

    pub fn set_body(&mut self, body: &str) -> Result<()> {
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyValue("the body").into());
        }
        self.body = Some(body.to_string());
        Ok(())
    }

    /// Whether subject or body still reference a given placeholder key.
    pub fn uses_placeholder(&self, key: &str) -> bool {
        debug_assert!(key.starts_with("{{"), "not a placeholder key: {key}");
        self.subject.as_deref().is_some_and(|s| s.contains(key))
            || self.body.as_deref().is_some_and(|b| b.contains(key))
    }

    /// Whether the body links back to the asset under workflow.
    pub fn links_to_asset(&self) -> bool {
        self.uses_placeholder(constants::PLACEHOLDER_LINK_TO_ASSET)
            || self.uses_placeholder(constants::PLACEHOLDER_LIVE_LINK_TO_ASSET)
    }
}

/// One action available from a workflow step.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowAction {
    pub identifier: Option<String>,
    pub label: Option<String>,
    pub action_type: Option<String>,
    pub next_id: Option<String>,
}

/// One step of a running workflow.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub identifier: Option<String>,
    pub label: Option<String>,
    pub step_type: Option<String>,
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub actions: Vec<WorkflowAction>,
}

/// A running workflow instance attached to an asset.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub related_entity: Option<Identifier>,
    pub current_step: Option<String>,
    pub owner: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "normalized_list")]
    pub ordered_steps: Vec<WorkflowStep>,
}

impl Workflow {
    /// The step the workflow is currently waiting on.
    pub fn active_step(&self) -> Option<&WorkflowStep> {
        let current = self.current_step.as_deref()?;
        self.ordered_steps
            .iter()
            .find(|s| s.identifier.as_deref() == Some(current))
    }
}

impl PropertyFields for Workflow {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl_container_contained_fields!(WorkflowDefinition, WorkflowEmail);
