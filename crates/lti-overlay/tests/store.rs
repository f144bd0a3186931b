//! Integration tests for the editing-session store.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use lti_model::{LtiConfiguration, LtiPlacement, PrivacyLevel};
use lti_overlay::{OverlayConfiguration, OverlayStore};

fn store() -> OverlayStore {
    let config = LtiConfiguration::from_json(
        r#"{
            "title": "Example Tool",
            "target_link_uri": "https://tool.example.com/launch",
            "oidc_initiation_url": "https://tool.example.com/oidc"
        }"#,
    )
    .unwrap();
    OverlayStore::from_config(&config)
}

#[test]
fn subscribers_see_every_mutation_once() {
    let mut store = store();
    let seen: Rc<RefCell<Vec<Arc<OverlayConfiguration>>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    store.subscribe(move |snapshot| sink.borrow_mut().push(Arc::clone(snapshot)));

    store.set_privacy_level(PrivacyLevel::Public);
    store.toggle_placement(LtiPlacement::CourseNavigation);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].data_sharing.privacy_level, Some(PrivacyLevel::Public));
    assert!(seen[1].is_placement_enabled(LtiPlacement::CourseNavigation));
    // The last notification is the store's current state.
    assert!(Arc::ptr_eq(&seen[1], &store.snapshot()));
}

#[test]
fn subscribers_are_notified_in_subscription_order() {
    let mut store = store();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    store.subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    store.subscribe(move |_| second.borrow_mut().push("second"));

    store.set_domain(Some("tool.example.com".to_string()));

    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn unsubscribed_callbacks_are_not_invoked() {
    let mut store = store();
    let calls = Rc::new(RefCell::new(0_u32));

    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.set_notes(Some("first pass".to_string()));
    store.unsubscribe(id);
    store.set_notes(Some("second pass".to_string()));

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn snapshots_taken_before_a_mutation_keep_the_old_state() {
    let mut store = store();
    let before = store.snapshot();

    store.set_admin_nickname(Some("Pilot".to_string()));
    let after = store.snapshot();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.naming.nickname, None);
    assert_eq!(after.naming.nickname.as_deref(), Some("Pilot"));

    // Untouched sections are shared between the two snapshots.
    assert!(Arc::ptr_eq(&before.launch_settings, &after.launch_settings));
}

#[test]
fn state_reflects_the_latest_mutation() {
    let mut store = store();

    store.toggle_scope("https://purl.imsglobal.org/spec/lti-ags/scope/score");
    assert!(
        store
            .state()
            .has_scope("https://purl.imsglobal.org/spec/lti-ags/scope/score")
    );

    store.toggle_scope("https://purl.imsglobal.org/spec/lti-ags/scope/score");
    assert!(
        !store
            .state()
            .has_scope("https://purl.imsglobal.org/spec/lti-ags/scope/score")
    );
}
