/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Capability traits the host application injects, and the typed host
//! domain events the workbench consumes.
//!
//! Adapters are minimal interfaces covering only the operations this core
//! actually invokes; the host supplies the concrete implementations.

use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::AdapterError;

/// UI container handle: content replacement plus element lookup by fixed id.
pub trait UiContainer {
    fn replace_content(&self, markup: &str);
    fn clear_content(&self);
    fn has_element(&self, id: &str) -> bool;
    fn set_element_text(&self, id: &str, text: &str);
    fn set_element_visible(&self, id: &str, visible: bool);
}

/// Ontology-fetch operations consumed by the loading collaborator.
pub trait ApiAdapter {
    /// Fetch the element set for `iri` from the backing service.
    fn fetch_ontology<'a>(&'a self, iri: &'a str)
    -> LocalBoxFuture<'a, Result<Value, AdapterError>>;
}

/// External application state, used by persistence and loading.
pub trait StateAdapter {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value) -> Result<(), AdapterError>;
    fn remove(&self, key: &str) -> Result<(), AdapterError>;
}

/// Callback registered with the host's event system.
pub type HostEventHandler = Box<dyn Fn(Value)>;

/// Opaque handle for one host-event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(Uuid);

impl SubscriptionHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Host event system: per-event subscription plus bulk teardown.
pub trait EventAdapter {
    fn subscribe(&self, event: &str, handler: HostEventHandler) -> SubscriptionHandle;
    fn unsubscribe_all(&self);
}

pub const ONTOLOGY_SELECTED: &str = "ontology:selected";
pub const ONTOLOGY_ELEMENT_SELECTED: &str = "ontology:element:selected";
pub const ONTOLOGY_EDGE_SELECTED: &str = "ontology:edge:selected";
pub const ONTOLOGY_RESET: &str = "ontology:reset";
pub const ONTOLOGY_RENAMED: &str = "ontology:renamed";
pub const ONTOLOGY_DELETED: &str = "ontology:deleted";

/// The six host domain events this core subscribes to.
pub const HOST_EVENT_NAMES: [&str; 6] = [
    ONTOLOGY_SELECTED,
    ONTOLOGY_ELEMENT_SELECTED,
    ONTOLOGY_EDGE_SELECTED,
    ONTOLOGY_RESET,
    ONTOLOGY_RENAMED,
    ONTOLOGY_DELETED,
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectedPayload {
    iri: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementSelectedPayload {
    #[serde(default)]
    node_id: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeSelectedPayload {
    #[serde(default)]
    edge_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphIriPayload {
    graph_iri: String,
    #[serde(default)]
    label: Option<String>,
}

/// Typed form of a host domain event, parsed from `(name, payload)` at the
/// subscription boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    OntologySelected {
        iri: String,
        label: Option<String>,
        project_id: Option<String>,
    },
    ElementSelected {
        node_id: Option<String>,
        kind: Option<String>,
    },
    EdgeSelected {
        edge_id: Option<String>,
    },
    OntologyReset,
    OntologyRenamed {
        graph_iri: String,
        label: Option<String>,
    },
    OntologyDeleted {
        graph_iri: String,
    },
}

impl HostEvent {
    /// Parse a raw host event. Returns `None` for unknown names or payloads
    /// missing required fields.
    pub fn parse(name: &str, payload: &Value) -> Option<HostEvent> {
        match name {
            ONTOLOGY_SELECTED => {
                let p: SelectedPayload = serde_json::from_value(payload.clone()).ok()?;
                Some(HostEvent::OntologySelected {
                    iri: p.iri,
                    label: p.label,
                    project_id: p.project_id,
                })
            },
            ONTOLOGY_ELEMENT_SELECTED => {
                let p: ElementSelectedPayload =
                    serde_json::from_value(payload.clone()).unwrap_or(ElementSelectedPayload {
                        node_id: None,
                        kind: None,
                    });
                Some(HostEvent::ElementSelected {
                    node_id: p.node_id,
                    kind: p.kind,
                })
            },
            ONTOLOGY_EDGE_SELECTED => {
                let p: EdgeSelectedPayload = serde_json::from_value(payload.clone())
                    .unwrap_or(EdgeSelectedPayload { edge_id: None });
                Some(HostEvent::EdgeSelected { edge_id: p.edge_id })
            },
            ONTOLOGY_RESET => Some(HostEvent::OntologyReset),
            ONTOLOGY_RENAMED => {
                let p: GraphIriPayload = serde_json::from_value(payload.clone()).ok()?;
                Some(HostEvent::OntologyRenamed {
                    graph_iri: p.graph_iri,
                    label: p.label,
                })
            },
            ONTOLOGY_DELETED => {
                let p: GraphIriPayload = serde_json::from_value(payload.clone()).ok()?;
                Some(HostEvent::OntologyDeleted {
                    graph_iri: p.graph_iri,
                })
            },
            _ => None,
        }
    }
}
