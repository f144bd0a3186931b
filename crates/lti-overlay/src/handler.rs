//! The overlay reducer.
//!
//! [`apply`] takes the current snapshot and one action and returns the next
//! snapshot. Exactly one section is rebuilt per action; the remaining
//! sections are shared with the previous snapshot, so the rendering layer
//! can detect what changed by pointer comparison.

use std::sync::Arc;

use crate::action::OverlayAction;
use crate::state::{
    DataSharing, Icons, LaunchSettings, Naming, OverlayConfiguration, OverrideUris, Permissions,
    Placements,
};

impl OverlayConfiguration {
    /// Apply one action to this snapshot, producing the next snapshot.
    ///
    /// Pure: `self` is untouched. Sections the action does not rewrite are
    /// shared between the two snapshots.
    pub fn apply(&self, action: OverlayAction) -> Self {
        apply(self, action)
    }
}

/// Apply one action to a snapshot, producing the next snapshot.
pub(crate) fn apply(current: &OverlayConfiguration, action: OverlayAction) -> OverlayConfiguration {
    match action {
        OverlayAction::SetRedirectUris(value) => {
            with_launch_settings(current, |launch| launch.redirect_uris = value)
        }
        OverlayAction::SetTargetLinkUri(value) => {
            with_launch_settings(current, |launch| launch.target_link_uri = value)
        }
        OverlayAction::SetOidcInitiationUrl(value) => {
            with_launch_settings(current, |launch| launch.oidc_initiation_url = value)
        }
        OverlayAction::SetJwkMethod(method) => {
            with_launch_settings(current, |launch| launch.jwk_method = Some(method))
        }
        OverlayAction::SetJwkUrl(value) => {
            with_launch_settings(current, |launch| launch.jwk_url = value)
        }
        OverlayAction::SetJwk(value) => with_launch_settings(current, |launch| launch.jwk = value),
        OverlayAction::SetDomain(value) => {
            with_launch_settings(current, |launch| launch.domain = value)
        }
        OverlayAction::SetCustomFields(value) => {
            with_launch_settings(current, |launch| launch.custom_fields = value)
        }

        OverlayAction::ToggleScope(scope) => {
            let scopes = toggle(current.permissions.scopes.as_deref(), scope);
            OverlayConfiguration {
                permissions: Arc::new(Permissions {
                    scopes: Some(scopes),
                }),
                ..current.clone()
            }
        }

        OverlayAction::SetPrivacyLevel(level) => OverlayConfiguration {
            data_sharing: Arc::new(DataSharing {
                privacy_level: Some(level),
            }),
            ..current.clone()
        },

        OverlayAction::TogglePlacement(placement) => with_placements(current, |placements| {
            placements.placements = Some(toggle(placements.placements.as_deref(), placement));
        }),

        OverlayAction::ToggleCourseNavigationDefaultDisabled => {
            with_placements(current, |placements| {
                let hidden = placements.course_navigation_default_disabled.unwrap_or(false);
                placements.course_navigation_default_disabled = Some(!hidden);
            })
        }

        OverlayAction::SetOverrideUri { placement, uri } => {
            let mut overrides = (*current.override_uris).clone();
            overrides.placements.entry(placement).or_default().uri = uri;
            OverlayConfiguration {
                override_uris: Arc::new(overrides),
                ..current.clone()
            }
        }

        OverlayAction::SetOverrideMessageType {
            placement,
            message_type,
        } => {
            let mut overrides: OverrideUris = (*current.override_uris).clone();
            overrides
                .placements
                .entry(placement)
                .or_default()
                .message_type = message_type;
            OverlayConfiguration {
                override_uris: Arc::new(overrides),
                ..current.clone()
            }
        }

        OverlayAction::SetAdminNickname(value) => {
            with_naming(current, |naming| naming.nickname = value)
        }
        OverlayAction::SetDescription(value) => {
            with_naming(current, |naming| naming.description = value)
        }
        OverlayAction::SetNotes(value) => with_naming(current, |naming| naming.notes = value),

        OverlayAction::SetPlacementLabel { placement, label } => {
            with_naming(current, |naming| {
                naming.placements.entry(placement).or_default().name = label;
            })
        }

        OverlayAction::SetPlacementIconUrl {
            placement,
            icon_url,
        } => {
            let mut icons: Icons = (*current.icons).clone();
            icons.placements.entry(placement).or_default().icon_url = icon_url;
            OverlayConfiguration {
                icons: Arc::new(icons),
                ..current.clone()
            }
        }
    }
}

/// Symmetric-difference toggle: add when absent, remove when present.
///
/// Insertion-order preserving on add; relative order of the remaining
/// entries is kept on remove. An absent list is treated as empty.
fn toggle<T: PartialEq + Clone>(current: Option<&[T]>, value: T) -> Vec<T> {
    let mut items: Vec<T> = current.map(<[T]>::to_vec).unwrap_or_default();
    if let Some(index) = items.iter().position(|item| *item == value) {
        items.remove(index);
    } else {
        items.push(value);
    }
    items
}

fn with_launch_settings(
    current: &OverlayConfiguration,
    edit: impl FnOnce(&mut LaunchSettings),
) -> OverlayConfiguration {
    let mut launch = (*current.launch_settings).clone();
    edit(&mut launch);
    OverlayConfiguration {
        launch_settings: Arc::new(launch),
        ..current.clone()
    }
}

fn with_placements(
    current: &OverlayConfiguration,
    edit: impl FnOnce(&mut Placements),
) -> OverlayConfiguration {
    let mut placements = (*current.placements).clone();
    edit(&mut placements);
    OverlayConfiguration {
        placements: Arc::new(placements),
        ..current.clone()
    }
}

fn with_naming(
    current: &OverlayConfiguration,
    edit: impl FnOnce(&mut Naming),
) -> OverlayConfiguration {
    let mut naming = (*current.naming).clone();
    edit(&mut naming);
    OverlayConfiguration {
        naming: Arc::new(naming),
        ..current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let toggled = toggle(None, "a");
        assert_eq!(toggled, ["a"]);
        let toggled = toggle(Some(&toggled), "a");
        assert!(toggled.is_empty());
    }

    #[test]
    fn toggle_keeps_relative_order_on_remove() {
        let items = vec!["a", "b", "c"];
        let toggled = toggle(Some(&items), "b");
        assert_eq!(toggled, ["a", "c"]);
    }
}
