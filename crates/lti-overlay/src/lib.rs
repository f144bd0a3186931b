//! Registration overlay state model and editing-session store.
//!
//! An overlay is the session-local set of user edits layered over a base
//! LTI configuration while an administrator edits a registration. The base
//! document and the finished overlay are committed together by the save
//! operation that ends the session; the overlay is never persisted on its
//! own.
//!
//! # Architecture
//!
//! - [`state`]: the [`OverlayConfiguration`] snapshot tree
//! - `init`: derives the first snapshot from an [`lti_model::LtiConfiguration`]
//! - [`action`]: the [`OverlayAction`] edits the form can make
//! - `handler`: the pure reducer applying one action to a snapshot
//! - [`store`]: the session-owned [`OverlayStore`] with subscriber
//!   notification
//!
//! # Example
//!
//! ```
//! use lti_model::{LtiConfiguration, LtiPlacement, PrivacyLevel};
//! use lti_overlay::OverlayStore;
//!
//! let config = LtiConfiguration::from_json(
//!     r#"{
//!         "title": "Example Tool",
//!         "target_link_uri": "https://tool.example.com/launch",
//!         "oidc_initiation_url": "https://tool.example.com/oidc",
//!         "placements": [{"placement": "course_navigation"}]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut store = OverlayStore::from_config(&config);
//! store.set_privacy_level(PrivacyLevel::Public);
//! store.toggle_placement(LtiPlacement::AccountNavigation);
//!
//! assert!(store.state().is_placement_enabled(LtiPlacement::AccountNavigation));
//! ```

pub mod action;
mod handler;
mod init;
pub mod state;
pub mod store;

pub use action::OverlayAction;
pub use state::{
    DataSharing, Icons, JwkMethod, LaunchSettings, Naming, OverlayConfiguration, OverrideUris,
    Permissions, PlacementIcon, PlacementNaming, PlacementOverride, Placements,
};
pub use store::{OverlayStore, SubscriptionId};
