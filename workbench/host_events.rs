/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Host domain-event handlers and canvas-signal handling.
//!
//! State machine over `(active_entity_iri, canvas mounted)`. Handler
//! failures are logged with the event context and never propagate to the
//! host; best-effort canvas cleanup is swallowed so label and tree updates
//! still happen.

use log::{debug, warn};
use serde_json::Value;
use tokio::time::sleep;

use super::{
    EMPTY_STATE_ID, GRAPH_LABEL_ID, LAYOUT_SECTION_ID, NO_GRAPH_LABEL, POST_LOAD_SETTLE,
    PROPERTIES_REFRESH_EVENT, TREE_REFRESH_EVENT, Workbench, graph_label,
};
use crate::canvas::CanvasSignal;
use crate::host::HostEvent;
use crate::selection;

impl Workbench {
    /// Apply one host domain event. Public for hosts that deliver
    /// synchronously instead of through the queued pump.
    pub async fn apply_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::OntologySelected { iri, .. } => self.on_ontology_selected(iri).await,
            HostEvent::ElementSelected { node_id, .. } => self.on_element_selected(node_id),
            HostEvent::EdgeSelected { edge_id } => self.on_edge_selected(edge_id),
            HostEvent::OntologyReset => self.reset_view(),
            HostEvent::OntologyRenamed { graph_iri, .. } => self.on_ontology_renamed(&graph_iri),
            HostEvent::OntologyDeleted { graph_iri } => self.on_ontology_deleted(&graph_iri),
        }
    }

    /// Apply one interaction signal drained from the canvas engine.
    pub fn apply_canvas_signal(&mut self, signal: CanvasSignal) {
        match signal {
            CanvasSignal::NodeTapped(_) | CanvasSignal::EdgeTapped(_) => {
                self.menu.close();
                self.bus.emit(PROPERTIES_REFRESH_EVENT, &Value::Null);
            },
            CanvasSignal::BackgroundTapped => {
                self.menu.close();
            },
            CanvasSignal::DragEnded { generation } => {
                if self.options.autosave
                    && let Err(e) = self.persist_with_generation(generation)
                {
                    warn!("autosave after drag failed: {e}");
                }
            },
            CanvasSignal::ContextMenuRequested { target, x, y } => {
                self.menu.open_at(target, x, y);
            },
        }
    }

    async fn on_ontology_selected(&mut self, iri: String) {
        self.active_entity_iri = Some(iri.clone());
        self.container
            .set_element_text(GRAPH_LABEL_ID, &graph_label(&iri));
        self.container.set_element_visible(EMPTY_STATE_ID, false);
        self.container.set_element_visible(LAYOUT_SECTION_ID, true);

        if self.canvas.is_some() {
            // Bulk repopulation fires change notifications from the engine;
            // suspend autosave for the whole window and re-enable only after
            // the awaited load settles.
            self.store.borrow_mut().set_suspend_autosave(true);
            if let Some(canvas) = self.canvas.as_mut()
                && let Err(e) = canvas.clear_elements()
            {
                debug!("clearing canvas before load failed (ignored): {e}");
            }
            if let Err(e) = self.load_ontology(&iri).await {
                warn!("loading ontology '{iri}' failed: {e}");
            }
            sleep(POST_LOAD_SETTLE).await;
            self.store.borrow_mut().set_suspend_autosave(false);
        }

        self.bus.emit(PROPERTIES_REFRESH_EVENT, &Value::Null);
        self.bus.emit(TREE_REFRESH_EVENT, &Value::Null);
    }

    fn on_element_selected(&mut self, node_id: Option<String>) {
        let Some(node_id) = node_id else { return };
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let bus = &mut self.bus;
        selection::select_element(canvas.as_mut(), &node_id, || {
            bus.emit(PROPERTIES_REFRESH_EVENT, &Value::Null);
        });
    }

    fn on_edge_selected(&mut self, edge_id: Option<String>) {
        let Some(edge_id) = edge_id else { return };
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let bus = &mut self.bus;
        selection::select_edge(canvas.as_mut(), &edge_id, || {
            bus.emit(PROPERTIES_REFRESH_EVENT, &Value::Null);
        });
    }

    /// Shared by `ontology:reset` and a deletion of the active graph.
    /// Label, visibility, and tree updates run even when clearing the
    /// canvas fails.
    fn reset_view(&mut self) {
        self.active_entity_iri = None;
        self.container.set_element_text(GRAPH_LABEL_ID, NO_GRAPH_LABEL);
        self.container.set_element_visible(EMPTY_STATE_ID, true);
        self.container.set_element_visible(LAYOUT_SECTION_ID, false);
        self.menu.close();
        if let Some(canvas) = self.canvas.as_mut()
            && let Err(e) = canvas.clear_elements()
        {
            debug!("clearing canvas on reset failed (ignored): {e}");
        }
        self.bus.emit(TREE_REFRESH_EVENT, &Value::Null);
    }

    fn on_ontology_renamed(&mut self, graph_iri: &str) {
        if self.active_entity_iri.as_deref() != Some(graph_iri) {
            return;
        }
        self.container
            .set_element_text(GRAPH_LABEL_ID, &graph_label(graph_iri));
        self.bus.emit(TREE_REFRESH_EVENT, &Value::Null);
    }

    fn on_ontology_deleted(&mut self, graph_iri: &str) {
        if self.active_entity_iri.as_deref() != Some(graph_iri) {
            return;
        }
        self.reset_view();
    }
}
