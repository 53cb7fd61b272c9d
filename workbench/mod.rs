/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lifecycle controller for one workbench instance.
//!
//! Owns the widget's full life from construction through teardown: mounts
//! the UI skeleton, constructs the canvas engine, subscribes to the host's
//! domain events, and exposes the load/persist operations. Each instance is
//! independently constructible and destroyable; nothing here is
//! process-global.

mod host_events;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;
use tokio::time::sleep;

use crate::bus::{BusHandler, EventBus, Subscription};
use crate::canvas::{CanvasEngine, CanvasFactory, CanvasHooks, CanvasSettings, CanvasSignal, MenuState};
use crate::config::{WorkbenchConfig, WorkbenchOptions};
use crate::error::{ConfigField, WorkbenchError};
use crate::host::{
    ApiAdapter, EventAdapter, HOST_EVENT_NAMES, HostEvent, StateAdapter, SubscriptionHandle,
    UiContainer,
};
use crate::loading::{self, Refresh};
use crate::persistence::{self, PersistRequest};
use crate::state::StateStore;

/// Fixed element ids the generated skeleton exposes to the container.
pub const CANVAS_MOUNT_ID: &str = "workbench-canvas";
pub const GRAPH_LABEL_ID: &str = "workbench-graph-label";
pub const EMPTY_STATE_ID: &str = "workbench-empty-state";
pub const LAYOUT_SECTION_ID: &str = "workbench-layout-section";

/// Events emitted on the public bus after internal mutations; host
/// renderers (tree view, properties panel) subscribe to these.
pub const TREE_REFRESH_EVENT: &str = "tree:refresh";
pub const PROPERTIES_REFRESH_EVENT: &str = "properties:refresh";
pub const CANVAS_REFRESH_EVENT: &str = "canvas:refresh";

pub const NO_GRAPH_LABEL: &str = "No graph selected";

// The host container gives no readiness signal after content replacement;
// a fixed settle interval stands in before the mount point is queried.
const UI_SETTLE: Duration = Duration::from_millis(50);
const POST_LOAD_SETTLE: Duration = Duration::from_millis(150);

/// Generated UI skeleton installed into the host container.
pub const UI_SKELETON: &str = "\
<div id=\"workbench-root\">\
<div id=\"workbench-graph-label\">No graph selected</div>\
<div id=\"workbench-canvas\"></div>\
<div id=\"workbench-empty-state\"></div>\
<div id=\"workbench-layout-section\" hidden></div>\
</div>";

pub(crate) fn graph_label(iri: &str) -> String {
    format!("Graph: {iri}")
}

/// Top-level orchestration object for one graph-editing widget instance.
pub struct Workbench {
    container: Box<dyn UiContainer>,
    api_adapter: Box<dyn ApiAdapter>,
    state_adapter: Box<dyn StateAdapter>,
    event_adapter: Box<dyn EventAdapter>,
    canvas_factory: Box<CanvasFactory>,
    options: WorkbenchOptions,
    store: Rc<RefCell<StateStore>>,
    bus: EventBus,
    menu: MenuState,
    host_queue: Rc<RefCell<VecDeque<HostEvent>>>,
    canvas_signals: Rc<RefCell<VecDeque<CanvasSignal>>>,
    /// Bumped at every load start and at destroy; persistence requests
    /// carry the value current when they were issued and are dropped when
    /// it is no longer the live one.
    generation: Rc<Cell<u64>>,
    canvas: Option<Box<dyn CanvasEngine>>,
    subscriptions: Vec<SubscriptionHandle>,
    active_entity_iri: Option<String>,
    initialized: bool,
}

impl Workbench {
    /// Validate the configuration and build an instance. Fails on the first
    /// missing adapter slot, checked in declaration order. The UI container
    /// is not touched until [`Workbench::initialize`].
    pub fn new(config: WorkbenchConfig) -> Result<Self, WorkbenchError> {
        let WorkbenchConfig {
            container,
            api_adapter,
            state_adapter,
            event_adapter,
            canvas_factory,
            options,
        } = config;
        let container =
            container.ok_or(WorkbenchError::MissingConfig(ConfigField::Container))?;
        let api_adapter =
            api_adapter.ok_or(WorkbenchError::MissingConfig(ConfigField::ApiAdapter))?;
        let state_adapter =
            state_adapter.ok_or(WorkbenchError::MissingConfig(ConfigField::StateAdapter))?;
        let event_adapter =
            event_adapter.ok_or(WorkbenchError::MissingConfig(ConfigField::EventAdapter))?;
        let canvas_factory =
            canvas_factory.ok_or(WorkbenchError::MissingConfig(ConfigField::CanvasFactory))?;

        Ok(Self {
            container,
            api_adapter,
            state_adapter,
            event_adapter,
            canvas_factory,
            options: WorkbenchOptions::merged(&options),
            store: Rc::new(RefCell::new(StateStore::new())),
            bus: EventBus::new(),
            menu: MenuState::default(),
            host_queue: Rc::new(RefCell::new(VecDeque::new())),
            canvas_signals: Rc::new(RefCell::new(VecDeque::new())),
            generation: Rc::new(Cell::new(0)),
            canvas: None,
            subscriptions: Vec::new(),
            active_entity_iri: None,
            initialized: false,
        })
    }

    /// Mount the UI skeleton, construct the canvas engine against the
    /// settled mount point, wire canvas hooks, and subscribe to the six
    /// host domain events. Idempotent: a repeat call while initialized is
    /// a logged no-op.
    pub async fn initialize(&mut self) -> Result<(), WorkbenchError> {
        if self.initialized {
            warn!("workbench already initialized; ignoring repeat initialize");
            return Ok(());
        }

        self.container.replace_content(UI_SKELETON);
        sleep(UI_SETTLE).await;
        if !self.container.has_element(CANVAS_MOUNT_ID) {
            return Err(WorkbenchError::MountPointMissing(CANVAS_MOUNT_ID));
        }

        let settings = CanvasSettings::from_options(&self.options, CANVAS_MOUNT_ID);
        let mut engine = (self.canvas_factory)(&settings, Rc::clone(&self.store))?;
        let hooks = CanvasHooks::new(
            Rc::clone(&self.canvas_signals),
            Rc::clone(&self.generation),
        );
        if let Err(e) = engine.install_hooks(hooks) {
            if let Err(destroy_err) = engine.destroy() {
                debug!("engine destroy after failed wiring ignored: {destroy_err}");
            }
            return Err(e.into());
        }
        self.canvas = Some(engine);

        for name in HOST_EVENT_NAMES {
            let queue = Rc::clone(&self.host_queue);
            let handle = self.event_adapter.subscribe(
                name,
                Box::new(move |payload| match HostEvent::parse(name, &payload) {
                    Some(event) => queue.borrow_mut().push_back(event),
                    None => warn!("dropping malformed payload for '{name}'"),
                }),
            );
            self.subscriptions.push(handle);
        }

        self.container.set_element_text(GRAPH_LABEL_ID, NO_GRAPH_LABEL);
        self.container.set_element_visible(EMPTY_STATE_ID, true);
        self.container.set_element_visible(LAYOUT_SECTION_ID, false);
        self.initialized = true;
        Ok(())
    }

    /// Tear the instance down. Every step is defensive against null state,
    /// so this is safe before `initialize()` and after a prior `destroy()`.
    /// In-flight load/persist operations are not aborted; the generation
    /// bump turns their late completions into stale no-ops.
    pub fn destroy(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.event_adapter.unsubscribe_all();
        self.subscriptions.clear();
        self.bus.clear();
        if let Some(mut engine) = self.canvas.take()
            && let Err(e) = engine.destroy()
        {
            debug!("canvas engine destroy failed (ignored): {e}");
        }
        self.store.borrow_mut().reset();
        self.menu.close();
        self.host_queue.borrow_mut().clear();
        self.canvas_signals.borrow_mut().clear();
        self.container.clear_content();
        self.active_entity_iri = None;
        self.initialized = false;
    }

    /// Drain queued host events and canvas signals, in arrival order.
    /// Hosts call this from their tick/frame loop.
    pub async fn pump(&mut self) {
        loop {
            let next = self.host_queue.borrow_mut().pop_front();
            let Some(event) = next else { break };
            self.apply_host_event(event).await;
        }
        loop {
            let next = self.canvas_signals.borrow_mut().pop_front();
            let Some(signal) = next else { break };
            self.apply_canvas_signal(signal);
        }
    }

    /// Load the element set for `iri` into the mounted canvas. A missing
    /// canvas means there is nothing to do, which is success.
    pub async fn load_ontology(&mut self, iri: &str) -> Result<(), WorkbenchError> {
        let Some(canvas) = self.canvas.as_mut() else {
            debug!("load for '{iri}' skipped: no canvas mounted");
            return Ok(());
        };
        self.generation.set(self.generation.get() + 1);
        let bus = &mut self.bus;
        loading::load_ontology(
            loading::LoadArgs {
                canvas: canvas.as_mut(),
                state: self.state_adapter.as_ref(),
                api: self.api_adapter.as_ref(),
            },
            iri,
            |refresh| match refresh {
                Refresh::CanvasViewport => bus.emit(CANVAS_REFRESH_EVENT, &Value::Null),
                Refresh::Tree => bus.emit(TREE_REFRESH_EVENT, &Value::Null),
            },
        )
        .await
    }

    /// Public alias for [`Workbench::persist_graph`].
    pub fn save_ontology(&mut self) -> Result<(), WorkbenchError> {
        self.persist_graph()
    }

    /// Serialize the canvas into the state adapter. A missing canvas or
    /// absent active entity means there is nothing to do, which is success.
    pub fn persist_graph(&mut self) -> Result<(), WorkbenchError> {
        self.persist_with_generation(self.generation.get())
    }

    pub(crate) fn persist_with_generation(
        &mut self,
        generation: u64,
    ) -> Result<(), WorkbenchError> {
        let Some(canvas) = self.canvas.as_ref() else {
            debug!("persist skipped: no canvas mounted");
            return Ok(());
        };
        let Some(iri) = self.active_entity_iri.as_deref() else {
            debug!("persist skipped: no active entity");
            return Ok(());
        };
        let suspended = self.store.borrow().suspend_autosave();
        persistence::persist_graph(
            PersistRequest {
                canvas: canvas.as_ref(),
                iri,
                state: self.state_adapter.as_ref(),
                suspended,
                generation,
            },
            self.generation.get(),
        )?;
        Ok(())
    }

    /// Register a public bus handler. The returned token unsubscribes
    /// exactly this registration and is idempotent.
    pub fn on(&mut self, event: &str, handler: BusHandler) -> Subscription {
        self.bus.on(event, handler)
    }

    /// Remove every handler registered for `event`.
    pub fn off(&mut self, event: &str) {
        self.bus.off(event);
    }

    /// Remove the registration behind `subscription`.
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        self.bus.unsubscribe(subscription);
    }

    /// Emit on the public bus with per-handler fault isolation.
    pub fn emit(&mut self, event: &str, data: &Value) {
        self.bus.emit(event, data);
    }

    /// Live state store reference, for advanced host integrations. Callers
    /// may read and write entries directly but must not change the type of
    /// reserved keys.
    pub fn state_store(&self) -> Rc<RefCell<StateStore>> {
        Rc::clone(&self.store)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn active_entity_iri(&self) -> Option<&str> {
        self.active_entity_iri.as_deref()
    }

    pub fn options(&self) -> &WorkbenchOptions {
        &self.options
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }
}
