//! Public JWK representation.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A tool's public JSON Web Key, as carried in the base configuration.
///
/// Only the public members of an RSA signing key are modeled; private key
/// material never appears in a registration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicJwk {
    /// Key type (e.g. `"RSA"`).
    pub kty: String,

    /// Signing algorithm (e.g. `"RS256"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    /// Public exponent, base64url-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// Modulus, base64url-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// Key identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// Intended use (`"sig"` for signing keys).
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
}

impl PublicJwk {
    /// Encode the key as its canonical textual form.
    ///
    /// Field order is fixed by the struct definition, so the same key always
    /// produces the same text. This is the encoding stored in an overlay's
    /// launch settings.
    pub fn canonical_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| ModelError::JwkEncode { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_json_is_stable_and_skips_unset_members() {
        let jwk = PublicJwk {
            kty: "RSA".to_string(),
            alg: Some("RS256".to_string()),
            e: Some("AQAB".to_string()),
            n: Some("oM5BXJ".to_string()),
            kid: None,
            key_use: Some("sig".to_string()),
        };

        let encoded = jwk.canonical_json().unwrap();
        assert_eq!(
            encoded,
            r#"{"kty":"RSA","alg":"RS256","e":"AQAB","n":"oM5BXJ","use":"sig"}"#
        );
        assert_eq!(jwk.canonical_json().unwrap(), encoded);
    }
}
