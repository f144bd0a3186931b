//! Overlay mutation actions.
//!
//! Every edit the registration form can make is represented as a variant of
//! [`OverlayAction`]. The store applies actions through a pure reducer, so
//! an action fully describes a transition between two snapshots.

use lti_model::{LtiMessageType, LtiPlacement, PrivacyLevel};

use crate::state::JwkMethod;

/// A single edit to the overlay.
///
/// Each action rewrites exactly one section of the configuration; all other
/// sections are carried over unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayAction {
    // =========================================================================
    // Launch settings
    // =========================================================================
    /// Replace the newline-delimited redirect URI list.
    SetRedirectUris(Option<String>),

    /// Replace the default launch URL.
    SetTargetLinkUri(Option<String>),

    /// Replace the OIDC login initiation URL.
    SetOidcInitiationUrl(Option<String>),

    /// Switch between keyset-URL and literal-key distribution.
    SetJwkMethod(JwkMethod),

    /// Replace the public keyset URL.
    SetJwkUrl(Option<String>),

    /// Replace the literal public key text.
    SetJwk(Option<String>),

    /// Replace the tool domain.
    SetDomain(Option<String>),

    /// Replace the custom launch parameters.
    SetCustomFields(Option<String>),

    // =========================================================================
    // Permissions and data sharing
    // =========================================================================
    /// Grant the scope if absent, revoke it if present.
    ToggleScope(String),

    /// Select a privacy level.
    SetPrivacyLevel(PrivacyLevel),

    // =========================================================================
    // Placements
    // =========================================================================
    /// Enable the placement if absent, disable it if present.
    TogglePlacement(LtiPlacement),

    /// Flip whether course navigation starts hidden.
    ToggleCourseNavigationDefaultDisabled,

    /// Replace a placement's launch URI.
    SetOverrideUri {
        placement: LtiPlacement,
        uri: Option<String>,
    },

    /// Replace a placement's launch message type.
    SetOverrideMessageType {
        placement: LtiPlacement,
        message_type: Option<LtiMessageType>,
    },

    // =========================================================================
    // Naming and icons
    // =========================================================================
    /// Replace the administrator-facing nickname.
    SetAdminNickname(Option<String>),

    /// Replace the registration description.
    SetDescription(Option<String>),

    /// Replace the administrator notes.
    SetNotes(Option<String>),

    /// Replace a placement's display name.
    SetPlacementLabel {
        placement: LtiPlacement,
        label: Option<String>,
    },

    /// Replace a placement's icon URL.
    SetPlacementIconUrl {
        placement: LtiPlacement,
        icon_url: Option<String>,
    },
}

impl OverlayAction {
    /// Get a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetRedirectUris(_) => "set_redirect_uris",
            Self::SetTargetLinkUri(_) => "set_target_link_uri",
            Self::SetOidcInitiationUrl(_) => "set_oidc_initiation_url",
            Self::SetJwkMethod(_) => "set_jwk_method",
            Self::SetJwkUrl(_) => "set_jwk_url",
            Self::SetJwk(_) => "set_jwk",
            Self::SetDomain(_) => "set_domain",
            Self::SetCustomFields(_) => "set_custom_fields",
            Self::ToggleScope(_) => "toggle_scope",
            Self::SetPrivacyLevel(_) => "set_privacy_level",
            Self::TogglePlacement(_) => "toggle_placement",
            Self::ToggleCourseNavigationDefaultDisabled => {
                "toggle_course_navigation_default_disabled"
            }
            Self::SetOverrideUri { .. } => "set_override_uri",
            Self::SetOverrideMessageType { .. } => "set_override_message_type",
            Self::SetAdminNickname(_) => "set_admin_nickname",
            Self::SetDescription(_) => "set_description",
            Self::SetNotes(_) => "set_notes",
            Self::SetPlacementLabel { .. } => "set_placement_label",
            Self::SetPlacementIconUrl { .. } => "set_placement_icon_url",
        }
    }
}
