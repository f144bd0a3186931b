//! Internal LTI configuration documents.
//!
//! The internal configuration is the base document an editing session starts
//! from. It is produced elsewhere (tool vendor JSON, dynamic registration)
//! and consumed here read-only: the overlay layers user edits on top of it
//! without ever writing back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::jwk::PublicJwk;
use crate::placement::LtiPlacement;
use crate::types::{LtiMessageType, PrivacyLevel};

/// One placement record in a base configuration.
///
/// The placement kind is required; every other field is optional and falls
/// back to document-level values when an overlay is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Which placement this record configures.
    pub placement: LtiPlacement,

    /// Message type sent when this placement launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<LtiMessageType>,

    /// Launch URL specific to this placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Display text shown in the host UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Whether the placement starts disabled when the tool is installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_disabled: Option<bool>,

    /// Icon shown next to the placement, when the host renders one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl PlacementConfig {
    /// Create a record for a placement with no optional fields set.
    pub fn new(placement: LtiPlacement) -> Self {
        Self {
            placement,
            message_type: None,
            url: None,
            text: None,
            default_disabled: None,
            icon_url: None,
        }
    }
}

/// An internal LTI configuration document.
///
/// Field names match the wire form of the document. Unknown placement kinds
/// and privacy levels fail parsing with a descriptive error; they are never
/// carried through to an editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LtiConfiguration {
    /// Tool title, used as the default display text for placements.
    pub title: String,

    /// Tool description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default launch URL for all placements.
    pub target_link_uri: String,

    /// OIDC login initiation URL.
    pub oidc_initiation_url: String,

    /// Allowed redirect URIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<String>,

    /// URL the host fetches the tool's public keyset from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_jwk_url: Option<String>,

    /// Inline public key, used when no keyset URL is provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_jwk: Option<PublicJwk>,

    /// Tool domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Custom launch parameters. Iteration order is the document order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub custom_fields: IndexMap<String, String>,

    /// Granted scope identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,

    /// Privacy level requested by the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<PrivacyLevel>,

    /// Placement records.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<PlacementConfig>,
}

impl LtiConfiguration {
    /// Parse a configuration document from JSON.
    ///
    /// This is the validation boundary: a document naming a placement or
    /// privacy level outside the known sets is rejected here, so downstream
    /// code can treat those enumerations as closed.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ModelError::Parse { source })?;
        tracing::debug!(
            title = %config.title,
            placements = config.placements.len(),
            scopes = config.scopes.len(),
            "parsed LTI configuration"
        );
        Ok(config)
    }

    /// Get the record for a placement, if the document configures one.
    pub fn placement(&self, placement: LtiPlacement) -> Option<&PlacementConfig> {
        self.placements
            .iter()
            .find(|record| record.placement == placement)
    }
}
