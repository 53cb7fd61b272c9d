/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lifecycle and orchestration core for an embeddable ontology graph-editing
//! workbench.
//!
//! The workbench owns the widget's internal state, wires together a visual
//! canvas engine, a selection/properties subsystem, a tree view, and a
//! persistence layer, and mediates between the host application's domain
//! events and the widget's internal operations. Rendering, the ontology data
//! model, and transport are external collaborators injected through the
//! capability traits in [`host`] and [`canvas`].

pub mod bus;
pub mod canvas;
pub mod config;
pub mod error;
pub mod host;
mod loading;
mod persistence;
mod selection;
pub mod state;
pub mod workbench;

pub use bus::{BusHandler, EventBus, Subscription};
pub use canvas::{
    CanvasEngine, CanvasFactory, CanvasHooks, CanvasSettings, CanvasSignal, MenuState, MenuTarget,
};
pub use config::{OptionOverrides, WorkbenchConfig, WorkbenchOptions};
pub use error::{AdapterError, CanvasError, ConfigField, WorkbenchError};
pub use host::{ApiAdapter, EventAdapter, HostEvent, HostEventHandler, StateAdapter, SubscriptionHandle, UiContainer};
pub use state::StateStore;
pub use workbench::Workbench;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
