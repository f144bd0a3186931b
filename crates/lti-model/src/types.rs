//! Enumerated settings shared between base configurations and overlays.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// PRIVACY LEVEL
// =============================================================================

/// How much user data the host shares with the external tool on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    /// No identifying user data is shared.
    Anonymous,
    /// Only the user's name is shared.
    NameOnly,
    /// Only the user's email address is shared.
    EmailOnly,
    /// All user data (name, email, avatar, SIS identifiers) is shared.
    Public,
}

impl PrivacyLevel {
    /// Get the wire identifier (e.g. `"name_only"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::NameOnly => "name_only",
            Self::EmailOnly => "email_only",
            Self::Public => "public",
        }
    }

    /// Get the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Anonymous => "Anonymous",
            Self::NameOnly => "Name Only",
            Self::EmailOnly => "Email Only",
            Self::Public => "All user data",
        }
    }

    /// Get all privacy levels, most restrictive first.
    pub const fn all() -> &'static [PrivacyLevel] {
        &[
            Self::Anonymous,
            Self::NameOnly,
            Self::EmailOnly,
            Self::Public,
        ]
    }
}

impl FromStr for PrivacyLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownPrivacyLevel {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LTI MESSAGE TYPE
// =============================================================================

/// Message type sent to the tool when a placement is launched.
///
/// Wire names follow the LTI 1.3 specification (`LtiResourceLinkRequest`,
/// `LtiDeepLinkingRequest`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LtiMessageType {
    /// Standard resource-link launch. The canonical default.
    #[default]
    LtiResourceLinkRequest,
    /// Deep-linking (content selection) launch.
    LtiDeepLinkingRequest,
}

impl LtiMessageType {
    /// Get the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LtiResourceLinkRequest => "LtiResourceLinkRequest",
            Self::LtiDeepLinkingRequest => "LtiDeepLinkingRequest",
        }
    }

    /// Get all message types.
    pub const fn all() -> &'static [LtiMessageType] {
        &[Self::LtiResourceLinkRequest, Self::LtiDeepLinkingRequest]
    }
}

impl FromStr for LtiMessageType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|message_type| message_type.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownMessageType {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for LtiMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_level_wire_names() {
        assert_eq!(
            serde_json::to_string(&PrivacyLevel::NameOnly).unwrap(),
            "\"name_only\""
        );
        assert_eq!(PrivacyLevel::from_str("public").unwrap(), PrivacyLevel::Public);
        assert!(PrivacyLevel::from_str("partial").is_err());
    }

    #[test]
    fn message_type_defaults_to_resource_link() {
        assert_eq!(
            LtiMessageType::default(),
            LtiMessageType::LtiResourceLinkRequest
        );
        assert_eq!(
            serde_json::to_string(&LtiMessageType::LtiDeepLinkingRequest).unwrap(),
            "\"LtiDeepLinkingRequest\""
        );
    }
}
