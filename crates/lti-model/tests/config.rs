//! Integration tests for configuration document parsing.

use lti_model::{LtiConfiguration, LtiPlacement, PrivacyLevel};

fn vendor_json() -> &'static str {
    r#"{
        "title": "Lunch Menu",
        "description": "Daily cafeteria menus",
        "target_link_uri": "https://lunch.example.com/launch",
        "oidc_initiation_url": "https://lunch.example.com/oidc",
        "redirect_uris": ["https://lunch.example.com/launch"],
        "public_jwk_url": "https://lunch.example.com/jwks",
        "domain": "lunch.example.com",
        "custom_fields": {"school": "$Canvas.account.id"},
        "scopes": ["https://purl.imsglobal.org/spec/lti-ags/scope/lineitem"],
        "privacy_level": "name_only",
        "placements": [
            {"placement": "course_navigation", "text": "Lunch", "default_disabled": true},
            {"placement": "editor_button", "message_type": "LtiDeepLinkingRequest"}
        ]
    }"#
}

#[test]
fn parses_vendor_document() {
    let config = LtiConfiguration::from_json(vendor_json()).unwrap();

    assert_eq!(config.title, "Lunch Menu");
    assert_eq!(config.privacy_level, Some(PrivacyLevel::NameOnly));
    assert_eq!(config.placements.len(), 2);

    let course_nav = config.placement(LtiPlacement::CourseNavigation).unwrap();
    assert_eq!(course_nav.text.as_deref(), Some("Lunch"));
    assert_eq!(course_nav.default_disabled, Some(true));

    let editor = config.placement(LtiPlacement::EditorButton).unwrap();
    assert_eq!(
        editor.message_type,
        Some(lti_model::LtiMessageType::LtiDeepLinkingRequest)
    );
    assert!(config.placement(LtiPlacement::GlobalNavigation).is_none());
}

#[test]
fn optional_fields_default_when_absent() {
    let config = LtiConfiguration::from_json(
        r#"{
            "title": "Minimal",
            "target_link_uri": "https://tool.example.com",
            "oidc_initiation_url": "https://tool.example.com/oidc"
        }"#,
    )
    .unwrap();

    assert!(config.redirect_uris.is_empty());
    assert!(config.custom_fields.is_empty());
    assert!(config.scopes.is_empty());
    assert!(config.placements.is_empty());
    assert_eq!(config.privacy_level, None);
    assert_eq!(config.public_jwk_url, None);
}

#[test]
fn unknown_placement_fails_with_descriptive_error() {
    let err = LtiConfiguration::from_json(
        r#"{
            "title": "Bad",
            "target_link_uri": "https://tool.example.com",
            "oidc_initiation_url": "https://tool.example.com/oidc",
            "placements": [{"placement": "fancy_navigation"}]
        }"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("fancy_navigation"));
}

#[test]
fn unknown_privacy_level_fails_parsing() {
    let result = LtiConfiguration::from_json(
        r#"{
            "title": "Bad",
            "target_link_uri": "https://tool.example.com",
            "oidc_initiation_url": "https://tool.example.com/oidc",
            "privacy_level": "partial"
        }"#,
    );

    assert!(result.is_err());
}

#[test]
fn custom_fields_preserve_document_order() {
    let config = LtiConfiguration::from_json(
        r#"{
            "title": "Ordered",
            "target_link_uri": "https://tool.example.com",
            "oidc_initiation_url": "https://tool.example.com/oidc",
            "custom_fields": {"zeta": "1", "alpha": "2", "mid": "3"}
        }"#,
    )
    .unwrap();

    let keys: Vec<&str> = config.custom_fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}
