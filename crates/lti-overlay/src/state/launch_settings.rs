//! Launch settings section.

use serde::{Deserialize, Serialize};

// =============================================================================
// JWK METHOD
// =============================================================================

/// How the tool's public key is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JwkMethod {
    /// The host fetches the keyset from a URL.
    PublicJwkUrl,
    /// The key is pasted into the form as a literal value.
    PublicJwk,
}

impl JwkMethod {
    /// Get the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PublicJwkUrl => "Public JWK URL",
            Self::PublicJwk => "Public JWK",
        }
    }
}

// =============================================================================
// LAUNCH SETTINGS
// =============================================================================

/// Overridden launch settings.
///
/// Every field is optional: an unset field means "no override" and the base
/// configuration's value applies. Redirect URIs are kept as one
/// newline-delimited string because that is how the editing form works with
/// them; the save operation splits them back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchSettings {
    /// Allowed redirect URIs, one per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<String>,

    /// Default launch URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_link_uri: Option<String>,

    /// OIDC login initiation URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_initiation_url: Option<String>,

    /// Which key-distribution method the form currently uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwk_method: Option<JwkMethod>,

    /// Public keyset URL, when [`JwkMethod::PublicJwkUrl`] is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwk_url: Option<String>,

    /// Literal public key text, when [`JwkMethod::PublicJwk`] is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwk: Option<String>,

    /// Tool domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Custom launch parameters, one `key=value` per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,
}
