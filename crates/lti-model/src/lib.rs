//! Typed model for internal LTI tool configurations.
//!
//! This crate provides type-safe representations of the base document an
//! LTI registration editing session starts from:
//!
//! - [`config`]: the internal configuration document and placement records
//! - [`placement`]: the closed set of known placement kinds
//! - [`types`]: privacy levels and LTI message types
//! - [`jwk`]: public JWK representation and its canonical text encoding
//! - [`error`]: parse/validation errors
//!
//! Parsing is the validation boundary: documents naming placement kinds,
//! privacy levels, or message types outside the known sets are rejected
//! with a descriptive error instead of being carried through the session.

pub mod config;
pub mod error;
pub mod jwk;
pub mod placement;
pub mod types;

pub use config::{LtiConfiguration, PlacementConfig};
pub use error::{ModelError, Result};
pub use jwk::PublicJwk;
pub use placement::LtiPlacement;
pub use types::{LtiMessageType, PrivacyLevel};
