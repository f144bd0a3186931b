//! Permissions and data-sharing sections.

use lti_model::PrivacyLevel;
use serde::{Deserialize, Serialize};

/// Granted scope identifiers.
///
/// `None` means the session has not touched scopes yet; toggling treats it
/// as the empty list. The list is insertion-ordered and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

impl Permissions {
    /// Check whether a scope is currently granted.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes
            .as_ref()
            .is_some_and(|scopes| scopes.iter().any(|granted| granted == scope))
    }
}

/// Selected privacy level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSharing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<PrivacyLevel>,
}
