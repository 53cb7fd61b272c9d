/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Opaque canvas-engine collaborator interface.
//!
//! The engine renders and owns low-level interaction; this core drives it
//! through the narrow [`CanvasEngine`] surface and receives interaction
//! feedback as queued [`CanvasSignal`]s via [`CanvasHooks`]. The workbench
//! drains the queue on its pump; the engine never calls back into the
//! controller directly.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::config::WorkbenchOptions;
use crate::error::CanvasError;
use crate::state::StateStore;

/// Settings handed to the canvas factory, derived from the merged options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasSettings {
    pub mount_id: &'static str,
    pub snap_to_grid: bool,
    pub grid_size: u32,
}

impl CanvasSettings {
    pub fn from_options(options: &WorkbenchOptions, mount_id: &'static str) -> Self {
        Self {
            mount_id,
            snap_to_grid: options.snap_to_grid,
            grid_size: options.grid_size,
        }
    }
}

/// Host-supplied constructor for the canvas engine. Called once per
/// `initialize()` against the settled mount point, with the live state
/// store shared in.
pub type CanvasFactory =
    dyn Fn(&CanvasSettings, Rc<RefCell<StateStore>>) -> Result<Box<dyn CanvasEngine>, CanvasError>;

/// Narrow interface over the external graph-rendering engine.
///
/// Selection of an unknown id is a delegated no-op, not an error.
pub trait CanvasEngine {
    fn clear_elements(&mut self) -> Result<(), CanvasError>;
    fn add_elements(&mut self, elements: &Value) -> Result<(), CanvasError>;
    fn apply_layout(&mut self, positions: &Value) -> Result<(), CanvasError>;
    fn select_node(&mut self, node_id: &str) -> Result<(), CanvasError>;
    fn select_edge(&mut self, edge_id: &str) -> Result<(), CanvasError>;
    /// Serialize current canvas state as `{"elements": ..., "positions": ...}`.
    fn snapshot(&self) -> Result<Value, CanvasError>;
    fn refresh_viewport(&mut self) -> Result<(), CanvasError>;
    /// Wire the engine's own event model (selection, drag, context menu)
    /// to the workbench signal queue.
    fn install_hooks(&mut self, hooks: CanvasHooks) -> Result<(), CanvasError>;
    fn destroy(&mut self) -> Result<(), CanvasError>;
}

/// Context-menu target under the pointer when the menu was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuTarget {
    Node(String),
    Edge(String),
    Background,
}

/// Context-menu state record, created once at construction and owned by the
/// lifecycle controller; the canvas wiring updates it through the drained
/// signals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    open: bool,
    position: Option<(f32, f32)>,
    target: Option<MenuTarget>,
}

impl MenuState {
    pub fn open_at(&mut self, target: MenuTarget, x: f32, y: f32) {
        self.open = true;
        self.position = Some((x, y));
        self.target = Some(target);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.position = None;
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> Option<&MenuTarget> {
        self.target.as_ref()
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }
}

/// Interaction feedback from the engine, drained by the workbench pump.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasSignal {
    NodeTapped(String),
    EdgeTapped(String),
    BackgroundTapped,
    /// Drag settled; carries the load generation current when the drag
    /// ended so stale autosaves can be suppressed.
    DragEnded {
        generation: u64,
    },
    ContextMenuRequested {
        target: MenuTarget,
        x: f32,
        y: f32,
    },
}

/// Engine-side handle for reporting interactions back to the workbench.
#[derive(Clone)]
pub struct CanvasHooks {
    signals: Rc<RefCell<VecDeque<CanvasSignal>>>,
    generation: Rc<Cell<u64>>,
}

impl CanvasHooks {
    pub(crate) fn new(
        signals: Rc<RefCell<VecDeque<CanvasSignal>>>,
        generation: Rc<Cell<u64>>,
    ) -> Self {
        Self { signals, generation }
    }

    pub fn node_tapped(&self, node_id: &str) {
        self.push(CanvasSignal::NodeTapped(node_id.to_string()));
    }

    pub fn edge_tapped(&self, edge_id: &str) {
        self.push(CanvasSignal::EdgeTapped(edge_id.to_string()));
    }

    pub fn background_tapped(&self) {
        self.push(CanvasSignal::BackgroundTapped);
    }

    pub fn drag_ended(&self) {
        self.push(CanvasSignal::DragEnded {
            generation: self.generation.get(),
        });
    }

    pub fn context_menu_requested(&self, target: MenuTarget, x: f32, y: f32) {
        self.push(CanvasSignal::ContextMenuRequested { target, x, y });
    }

    fn push(&self, signal: CanvasSignal) {
        self.signals.borrow_mut().push_back(signal);
    }
}
