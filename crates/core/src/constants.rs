//! Shared constants.

/// Length of the hexadecimal ids the service assigns to assets.
pub const ASSET_ID_LENGTH: usize = 32;

/// Placeholder keys the service substitutes into workflow email bodies.
pub const PLACEHOLDER_ASSET_NAME: &str = "{{ASSET_NAME}}";
pub const PLACEHOLDER_ASSET_NAME_LIVE: &str = "{{ASSET_NAME_LIVE}}";
pub const PLACEHOLDER_CURRENT_DATE: &str = "{{CURRENT_DATE}}";
pub const PLACEHOLDER_WORKFLOW_CURRENT_STEP_NAME: &str = "{{WORKFLOW_CURRENT_STEP_NAME}}";
pub const PLACEHOLDER_WORKFLOW_DUE_DATE: &str = "{{WORKFLOW_DUE_DATE}}";
pub const PLACEHOLDER_WORKFLOW_EMAIL_RECIPIENT: &str = "{{WORKFLOW_EMAIL_RECIPIENT}}";
pub const PLACEHOLDER_LINK_TO_ASSET: &str = "{{LINK_TO_ASSET}}";
pub const PLACEHOLDER_LINK_TO_WORKFLOW: &str = "{{LINK_TO_WORKFLOW}}";
pub const PLACEHOLDER_LIVE_LINK_TO_ASSET: &str = "{{LIVE_LINK_TO_ASSET}}";
pub const PLACEHOLDER_WORKFLOW_NEXT_STEP_NAME: &str = "{{WORKFLOW_NEXT_STEP_NAME}}";
pub const PLACEHOLDER_WORKFLOW_OWNER: &str = "{{WORKFLOW_OWNER}}";
pub const PLACEHOLDER_WORKFLOW_SITE_LINK: &str = "{{WORKFLOW_SITE_LINK}}";
pub const PLACEHOLDER_WORKFLOW_SITE_NAME: &str = "{{WORKFLOW_SITE_NAME}}";
pub const PLACEHOLDER_WORKFLOW_START_DATE: &str = "{{WORKFLOW_START_DATE}}";
pub const PLACEHOLDER_WORKFLOW_STEP_OWNER: &str = "{{WORKFLOW_STEP_OWNER}}";
pub const PLACEHOLDER_WORKFLOW_NAME: &str = "{{WORKFLOW_NAME}}";
