/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use ontology_workbench::host::ONTOLOGY_SELECTED;

use crate::harness::Harness;

fn record(seen: &Rc<RefCell<Vec<String>>>, tag: &str) -> ontology_workbench::BusHandler {
    let seen = Rc::clone(seen);
    let tag = tag.to_string();
    Box::new(move |_| {
        seen.borrow_mut().push(tag.clone());
        Ok(())
    })
}

#[test]
fn unsubscribed_handler_is_never_invoked() {
    let mut harness = Harness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sub = harness.workbench.on("tick", record(&seen, "a"));
    harness.workbench.unsubscribe(&sub);
    harness.workbench.unsubscribe(&sub);
    harness.workbench.emit("tick", &json!(1));
    assert!(seen.borrow().is_empty());
}

#[test]
fn off_removes_every_handler_for_the_event() {
    let mut harness = Harness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    harness.workbench.on("tick", record(&seen, "a"));
    harness.workbench.on("tick", record(&seen, "b"));
    harness.workbench.off("tick");
    harness.workbench.emit("tick", &json!(1));
    assert!(seen.borrow().is_empty());
}

#[test]
fn failing_subscriber_does_not_block_the_rest() {
    let mut harness = Harness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    harness
        .workbench
        .on("tick", Box::new(|_| Err("subscriber broke".to_string())));
    harness.workbench.on("tick", record(&seen, "b"));
    harness.workbench.on("tick", record(&seen, "c"));
    harness.workbench.emit("tick", &json!(1));
    assert_eq!(*seen.borrow(), vec!["b", "c"]);
}

#[test]
fn persist_without_active_entity_reaches_no_collaborator() {
    let mut harness = Harness::new();
    harness.workbench.persist_graph().unwrap();
    assert_eq!(harness.canvas.snapshots_taken.get(), 0);
    assert_eq!(harness.state.len(), 0);
}

#[tokio::test(start_paused = true)]
async fn persist_writes_snapshot_under_ontology_and_layout_keys() {
    let mut harness = Harness::initialized().await;
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1"}))
        .await;
    *harness.canvas.snapshot.borrow_mut() = json!({
        "elements": [{"id": "n1"}],
        "positions": {"n1": {"x": 3.0, "y": 4.0}},
    });

    harness.workbench.save_ontology().unwrap();

    assert_eq!(
        harness.state.get("ontology:http://ex/O1"),
        Some(json!([{"id": "n1"}]))
    );
    assert_eq!(
        harness.state.get("layout:http://ex/O1"),
        Some(json!({"n1": {"x": 3.0, "y": 4.0}}))
    );
}

#[tokio::test(start_paused = true)]
async fn persist_is_suppressed_while_autosave_is_suspended() {
    let mut harness = Harness::initialized().await;
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1"}))
        .await;
    harness
        .workbench
        .state_store()
        .borrow_mut()
        .set_suspend_autosave(true);

    harness.workbench.persist_graph().unwrap();
    assert_eq!(harness.canvas.snapshots_taken.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn drag_autosave_persists_current_generation_only() {
    let mut harness = Harness::initialized().await;
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1"}))
        .await;
    let hooks = harness.canvas.hooks();

    hooks.drag_ended();
    harness.workbench.pump().await;
    assert_eq!(harness.canvas.snapshots_taken.get(), 1);

    // A drag signal issued before a newer load is stale and skipped.
    hooks.drag_ended();
    harness.workbench.load_ontology("http://ex/O2").await.unwrap();
    harness.workbench.pump().await;
    assert_eq!(harness.canvas.snapshots_taken.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn drag_autosave_respects_disabled_autosave_option() {
    let mut harness = Harness::with_options(ontology_workbench::OptionOverrides {
        autosave: Some(false),
        ..Default::default()
    });
    harness.workbench.initialize().await.unwrap();
    harness
        .deliver(ONTOLOGY_SELECTED, json!({"iri": "http://ex/O1"}))
        .await;

    harness.canvas.hooks().drag_ended();
    harness.workbench.pump().await;
    assert_eq!(harness.canvas.snapshots_taken.get(), 0);
}
