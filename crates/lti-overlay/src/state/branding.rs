//! Naming and icon sections.

use std::collections::BTreeMap;

use lti_model::LtiPlacement;
use serde::{Deserialize, Serialize};

// =============================================================================
// NAMING
// =============================================================================

/// Display-name override for one placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementNaming {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Global naming overrides plus per-placement display names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    /// Administrator-facing nickname for the registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Description shown where the tool is surfaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form administrator notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Display names keyed by placement.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub placements: BTreeMap<LtiPlacement, PlacementNaming>,
}

impl Naming {
    /// Get the display name configured for a placement.
    pub fn placement_name(&self, placement: LtiPlacement) -> Option<&str> {
        self.placements
            .get(&placement)
            .and_then(|naming| naming.name.as_deref())
    }
}

// =============================================================================
// ICONS
// =============================================================================

/// Icon override for one placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementIcon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Icon overrides keyed by placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub placements: BTreeMap<LtiPlacement, PlacementIcon>,
}

impl Icons {
    /// Get the icon URL configured for a placement.
    pub fn icon_url(&self, placement: LtiPlacement) -> Option<&str> {
        self.placements
            .get(&placement)
            .and_then(|icon| icon.icon_url.as_deref())
    }
}
