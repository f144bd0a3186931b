//! Overlay configuration state.
//!
//! The overlay is a tree of named sections, each holding the user's edits
//! for one area of the registration form:
//!
//! - [`LaunchSettings`]: URIs, key distribution, domain, custom fields
//! - [`Permissions`]: granted scopes
//! - [`DataSharing`]: privacy level
//! - [`Placements`]: enabled placements
//! - [`OverrideUris`]: per-placement message type and launch URI
//! - [`Naming`]: nickname/description/notes and per-placement names
//! - [`Icons`]: per-placement icon URLs
//!
//! Snapshots are immutable. Each section sits behind an [`Arc`] so a
//! mutation rebuilds exactly one section and shares the rest; the rendering
//! layer detects change with [`Arc::ptr_eq`] instead of deep comparison.

mod branding;
mod launch_settings;
mod placements;
mod sharing;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use branding::{Icons, Naming, PlacementIcon, PlacementNaming};
pub use launch_settings::{JwkMethod, LaunchSettings};
pub use placements::{OverrideUris, PlacementOverride, Placements};
pub use sharing::{DataSharing, Permissions};

/// One immutable snapshot of the overlay.
///
/// Cloning is cheap: only the seven section pointers are copied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfiguration {
    pub launch_settings: Arc<LaunchSettings>,
    pub permissions: Arc<Permissions>,
    pub data_sharing: Arc<DataSharing>,
    pub placements: Arc<Placements>,
    pub override_uris: Arc<OverrideUris>,
    pub naming: Arc<Naming>,
    pub icons: Arc<Icons>,
}

impl OverlayConfiguration {
    /// Check whether a scope is currently granted.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.permissions.has_scope(scope)
    }

    /// Check whether a placement is currently enabled.
    pub fn is_placement_enabled(&self, placement: lti_model::LtiPlacement) -> bool {
        self.placements.is_enabled(placement)
    }
}
