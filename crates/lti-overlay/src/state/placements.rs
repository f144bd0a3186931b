//! Placement selection and per-placement launch overrides.

use std::collections::BTreeMap;

use lti_model::{LtiMessageType, LtiPlacement};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENABLED PLACEMENTS
// =============================================================================

/// Which placements the tool is enabled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placements {
    /// Enabled placements, insertion-ordered and duplicate-free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<Vec<LtiPlacement>>,

    /// Whether course navigation starts hidden when the tool is installed.
    ///
    /// Unset means false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_navigation_default_disabled: Option<bool>,
}

impl Placements {
    /// Check whether a placement is currently enabled.
    pub fn is_enabled(&self, placement: LtiPlacement) -> bool {
        self.placements
            .as_ref()
            .is_some_and(|enabled| enabled.contains(&placement))
    }

    /// Whether course navigation starts hidden (unset counts as false).
    pub fn course_navigation_hidden_by_default(&self) -> bool {
        self.course_navigation_default_disabled.unwrap_or(false)
    }
}

// =============================================================================
// LAUNCH OVERRIDES
// =============================================================================

/// Per-placement message type and launch URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOverride {
    /// Message type sent when this placement launches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<LtiMessageType>,

    /// Launch URI for this placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Launch overrides keyed by placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideUris {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub placements: BTreeMap<LtiPlacement, PlacementOverride>,
}

impl OverrideUris {
    /// Get the override record for a placement, if one exists.
    pub fn get(&self, placement: LtiPlacement) -> Option<&PlacementOverride> {
        self.placements.get(&placement)
    }
}
