//! The editing-session store.
//!
//! One [`OverlayStore`] is created when a registration editing session
//! opens and dropped when the session ends (save or cancel). It is owned by
//! the session's top-level component and handed down to whatever needs it;
//! it is deliberately not a process-wide singleton.
//!
//! The store is single-threaded and synchronous: applying an action runs
//! the reducer, swaps the held snapshot, and notifies every current
//! subscriber before returning. Subscribers are notified in subscription
//! order, once per applied action.

use std::fmt;
use std::sync::Arc;

use lti_model::{LtiConfiguration, LtiMessageType, LtiPlacement, PrivacyLevel};

use crate::action::OverlayAction;
use crate::handler;
use crate::state::{JwkMethod, OverlayConfiguration};

/// Handle returned by [`OverlayStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Arc<OverlayConfiguration>)>;

/// Holds the current overlay snapshot for one editing session.
pub struct OverlayStore {
    state: Arc<OverlayConfiguration>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl OverlayStore {
    /// Create a store holding the given snapshot.
    pub fn new(initial: OverlayConfiguration) -> Self {
        Self {
            state: Arc::new(initial),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store for a fresh session over a base configuration.
    pub fn from_config(config: &LtiConfiguration) -> Self {
        Self::new(OverlayConfiguration::from_config(config))
    }

    /// Get the current snapshot.
    pub fn state(&self) -> &OverlayConfiguration {
        &self.state
    }

    /// Get a shared handle to the current snapshot.
    ///
    /// The handle stays valid across later mutations; it simply keeps
    /// pointing at the snapshot that was current when it was taken.
    pub fn snapshot(&self) -> Arc<OverlayConfiguration> {
        Arc::clone(&self.state)
    }

    /// Register a callback invoked with the new snapshot after every
    /// applied action.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Arc<OverlayConfiguration>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Apply an action: run the reducer, swap the snapshot, notify
    /// subscribers.
    pub fn apply(&mut self, action: OverlayAction) {
        tracing::debug!(action = action.name(), "applying overlay action");
        let next = Arc::new(handler::apply(&self.state, action));
        self.state = Arc::clone(&next);
        for (_, callback) in &mut self.subscribers {
            callback(&next);
        }
    }

    // =========================================================================
    // Named actions
    // =========================================================================

    /// Replace the newline-delimited redirect URI list.
    pub fn set_redirect_uris(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetRedirectUris(value));
    }

    /// Replace the default launch URL.
    pub fn set_target_link_uri(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetTargetLinkUri(value));
    }

    /// Replace the OIDC login initiation URL.
    pub fn set_oidc_initiation_url(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetOidcInitiationUrl(value));
    }

    /// Switch between keyset-URL and literal-key distribution.
    pub fn set_jwk_method(&mut self, method: JwkMethod) {
        self.apply(OverlayAction::SetJwkMethod(method));
    }

    /// Replace the public keyset URL.
    pub fn set_jwk_url(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetJwkUrl(value));
    }

    /// Replace the literal public key text.
    pub fn set_jwk(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetJwk(value));
    }

    /// Replace the tool domain.
    pub fn set_domain(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetDomain(value));
    }

    /// Replace the custom launch parameters.
    pub fn set_custom_fields(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetCustomFields(value));
    }

    /// Grant the scope if absent, revoke it if present.
    pub fn toggle_scope(&mut self, scope: impl Into<String>) {
        self.apply(OverlayAction::ToggleScope(scope.into()));
    }

    /// Select a privacy level.
    pub fn set_privacy_level(&mut self, level: PrivacyLevel) {
        self.apply(OverlayAction::SetPrivacyLevel(level));
    }

    /// Enable the placement if absent, disable it if present.
    pub fn toggle_placement(&mut self, placement: LtiPlacement) {
        self.apply(OverlayAction::TogglePlacement(placement));
    }

    /// Flip whether course navigation starts hidden.
    pub fn toggle_course_navigation_default_disabled(&mut self) {
        self.apply(OverlayAction::ToggleCourseNavigationDefaultDisabled);
    }

    /// Replace a placement's launch URI.
    pub fn set_override_uri(&mut self, placement: LtiPlacement, uri: Option<String>) {
        self.apply(OverlayAction::SetOverrideUri { placement, uri });
    }

    /// Replace a placement's launch message type.
    pub fn set_override_message_type(
        &mut self,
        placement: LtiPlacement,
        message_type: Option<LtiMessageType>,
    ) {
        self.apply(OverlayAction::SetOverrideMessageType {
            placement,
            message_type,
        });
    }

    /// Replace the administrator-facing nickname.
    pub fn set_admin_nickname(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetAdminNickname(value));
    }

    /// Replace the registration description.
    pub fn set_description(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetDescription(value));
    }

    /// Replace the administrator notes.
    pub fn set_notes(&mut self, value: Option<String>) {
        self.apply(OverlayAction::SetNotes(value));
    }

    /// Replace a placement's display name.
    pub fn set_placement_label(&mut self, placement: LtiPlacement, label: Option<String>) {
        self.apply(OverlayAction::SetPlacementLabel { placement, label });
    }

    /// Replace a placement's icon URL.
    pub fn set_placement_icon_url(&mut self, placement: LtiPlacement, icon_url: Option<String>) {
        self.apply(OverlayAction::SetPlacementIconUrl {
            placement,
            icon_url,
        });
    }
}

impl fmt::Debug for OverlayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
