//! Deriving the first overlay snapshot from a base configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use lti_model::{LtiConfiguration, LtiPlacement, PlacementConfig};

use crate::state::{
    DataSharing, Icons, JwkMethod, LaunchSettings, Naming, OverlayConfiguration, OverrideUris,
    Permissions, PlacementIcon, PlacementNaming, PlacementOverride, Placements,
};

impl OverlayConfiguration {
    /// Derive the initial overlay for an editing session.
    ///
    /// Pure and deterministic: the same document always yields the same
    /// snapshot. Unset document fields stay unset in the overlay rather
    /// than becoming empty strings, so the form can distinguish "never
    /// provided" from "cleared by the user".
    pub fn from_config(config: &LtiConfiguration) -> Self {
        let records = first_occurrence_records(config);

        Self {
            launch_settings: Arc::new(launch_settings(config)),
            permissions: Arc::new(Permissions {
                scopes: non_empty(dedup_preserving_order(&config.scopes)),
            }),
            data_sharing: Arc::new(DataSharing {
                privacy_level: config.privacy_level,
            }),
            placements: Arc::new(placements(&records)),
            override_uris: Arc::new(override_uris(config, &records)),
            naming: Arc::new(naming(config, &records)),
            icons: Arc::new(icons(&records)),
        }
    }
}

fn launch_settings(config: &LtiConfiguration) -> LaunchSettings {
    let jwk_method = if config.public_jwk_url.is_some() {
        JwkMethod::PublicJwkUrl
    } else {
        JwkMethod::PublicJwk
    };

    let jwk = config.public_jwk.as_ref().and_then(|key| match key.canonical_json() {
        Ok(encoded) => Some(encoded),
        Err(error) => {
            tracing::warn!(%error, "dropping unencodable public JWK from overlay");
            None
        }
    });

    LaunchSettings {
        redirect_uris: non_empty(config.redirect_uris.clone()).map(|uris| uris.join("\n")),
        target_link_uri: Some(config.target_link_uri.clone()),
        oidc_initiation_url: Some(config.oidc_initiation_url.clone()),
        jwk_method: Some(jwk_method),
        jwk_url: config.public_jwk_url.clone(),
        jwk,
        domain: config.domain.clone(),
        custom_fields: custom_fields_text(config),
    }
}

/// Serialize custom fields as `key=value` lines, in document order.
fn custom_fields_text(config: &LtiConfiguration) -> Option<String> {
    if config.custom_fields.is_empty() {
        return None;
    }
    let mut text = String::new();
    for (key, value) in &config.custom_fields {
        text.push_str(key);
        text.push('=');
        text.push_str(value);
        text.push('\n');
    }
    Some(text)
}

fn placements(records: &[&PlacementConfig]) -> Placements {
    let kinds: Vec<LtiPlacement> = records.iter().map(|record| record.placement).collect();

    let course_navigation_default_disabled = records
        .iter()
        .find(|record| record.placement == LtiPlacement::CourseNavigation)
        .map(|record| record.default_disabled.unwrap_or(false));

    Placements {
        placements: non_empty(kinds),
        course_navigation_default_disabled,
    }
}

fn override_uris(config: &LtiConfiguration, records: &[&PlacementConfig]) -> OverrideUris {
    let mut placements = BTreeMap::new();
    for record in records {
        placements.insert(
            record.placement,
            PlacementOverride {
                message_type: Some(record.message_type.unwrap_or_default()),
                uri: Some(
                    record
                        .url
                        .clone()
                        .unwrap_or_else(|| config.target_link_uri.clone()),
                ),
            },
        );
    }
    OverrideUris { placements }
}

fn naming(config: &LtiConfiguration, records: &[&PlacementConfig]) -> Naming {
    let mut placements = BTreeMap::new();
    for record in records {
        placements.insert(
            record.placement,
            PlacementNaming {
                name: Some(record.text.clone().unwrap_or_else(|| config.title.clone())),
            },
        );
    }
    Naming {
        nickname: None,
        description: None,
        notes: None,
        placements,
    }
}

fn icons(records: &[&PlacementConfig]) -> Icons {
    let mut placements = BTreeMap::new();
    for record in records {
        placements.insert(
            record.placement,
            PlacementIcon {
                icon_url: record.icon_url.clone(),
            },
        );
    }
    Icons { placements }
}

/// Placement records with later duplicates dropped.
fn first_occurrence_records(config: &LtiConfiguration) -> Vec<&PlacementConfig> {
    let mut seen: Vec<LtiPlacement> = Vec::new();
    let mut records = Vec::new();
    for record in &config.placements {
        if seen.contains(&record.placement) {
            tracing::warn!(
                placement = %record.placement,
                "ignoring duplicate placement record in base configuration"
            );
            continue;
        }
        seen.push(record.placement);
        records.push(record);
    }
    records
}

fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
