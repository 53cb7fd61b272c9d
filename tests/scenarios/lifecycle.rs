/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde_json::json;

use ontology_workbench::WorkbenchError;
use ontology_workbench::host::{HOST_EVENT_NAMES, ONTOLOGY_SELECTED};
use ontology_workbench::workbench::{
    CANVAS_MOUNT_ID, EMPTY_STATE_ID, GRAPH_LABEL_ID, LAYOUT_SECTION_ID, NO_GRAPH_LABEL,
};

use crate::harness::Harness;

#[test]
fn construct_then_destroy_without_initialize_does_not_panic() {
    let mut harness = Harness::new();
    harness.workbench.destroy();
    assert!(!harness.workbench.is_initialized());
    assert!(harness.workbench.active_entity_iri().is_none());
    // Construction never touches the container; destroy clears it.
    assert!(harness.container.content.borrow().is_none());
}

#[tokio::test(start_paused = true)]
async fn initialize_mounts_skeleton_and_subscribes_host_events() {
    let harness = Harness::initialized().await;
    assert!(harness.workbench.is_initialized());
    assert_eq!(harness.canvas.engines_created.get(), 1);
    assert!(
        harness
            .container
            .content
            .borrow()
            .as_ref()
            .is_some_and(|c| c.contains(CANVAS_MOUNT_ID))
    );
    assert_eq!(
        *harness.events.subscribed.borrow(),
        HOST_EVENT_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>()
    );
    assert_eq!(harness.container.text(GRAPH_LABEL_ID).as_deref(), Some(NO_GRAPH_LABEL));
    assert_eq!(harness.container.is_visible(EMPTY_STATE_ID), Some(true));
    assert_eq!(harness.container.is_visible(LAYOUT_SECTION_ID), Some(false));
}

#[tokio::test(start_paused = true)]
async fn repeat_initialize_is_a_no_op_with_one_engine() {
    let mut harness = Harness::initialized().await;
    harness.workbench.initialize().await.unwrap();
    assert_eq!(harness.canvas.engines_created.get(), 1);
    assert!(harness.workbench.is_initialized());
    // No duplicate host subscriptions either.
    assert_eq!(harness.events.subscribed.borrow().len(), HOST_EVENT_NAMES.len());
}

#[tokio::test(start_paused = true)]
async fn initialize_fails_when_mount_point_is_missing() {
    let mut harness = Harness::new();
    harness.container.missing_mount.set(true);
    let err = harness.workbench.initialize().await.unwrap_err();
    assert!(matches!(err, WorkbenchError::MountPointMissing(_)));
    assert!(!harness.workbench.is_initialized());
    assert_eq!(harness.canvas.engines_created.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn destroy_tears_down_every_resource() {
    let mut harness = Harness::initialized().await;
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1", "label": "O1"}))
        .await;
    let emissions = harness.record_emissions("custom:event");

    harness.workbench.destroy();

    assert!(!harness.workbench.is_initialized());
    assert!(harness.workbench.active_entity_iri().is_none());
    assert!(harness.container.content.borrow().is_none());
    assert!(harness.canvas.destroyed.get());
    assert_eq!(harness.events.unsubscribe_all_calls.get(), 1);
    assert!(!harness.workbench.state_store().borrow().suspend_autosave());
    // Bus registry is empty: emitting reaches no prior subscriber.
    harness.workbench.emit("custom:event", &json!(1));
    assert!(emissions.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn destroy_twice_is_safe() {
    let mut harness = Harness::initialized().await;
    harness.workbench.destroy();
    harness.workbench.destroy();
    assert_eq!(harness.events.unsubscribe_all_calls.get(), 2);
    assert!(!harness.workbench.is_initialized());
}

#[tokio::test(start_paused = true)]
async fn drag_after_destroy_persists_nothing() {
    let mut harness = Harness::initialized().await;
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1"}))
        .await;
    let hooks = harness.canvas.hooks();
    harness.workbench.destroy();
    let writes_after_destroy = harness.state.len();

    // Late interaction from the torn-down engine must be a no-op.
    hooks.drag_ended();
    harness.workbench.pump().await;
    assert_eq!(harness.state.len(), writes_after_destroy);
}
