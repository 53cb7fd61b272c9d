/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Error types for the workbench core.

use std::fmt;

/// Configuration slots validated at construction, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Container,
    ApiAdapter,
    StateAdapter,
    EventAdapter,
    CanvasFactory,
}

impl ConfigField {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::Container => "container",
            ConfigField::ApiAdapter => "api_adapter",
            ConfigField::StateAdapter => "state_adapter",
            ConfigField::EventAdapter => "event_adapter",
            ConfigField::CanvasFactory => "canvas_factory",
        }
    }
}

/// Errors raised by injected state/API adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    State(String),
    Api(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::State(e) => write!(f, "state adapter error: {e}"),
            AdapterError::Api(e) => write!(f, "api adapter error: {e}"),
        }
    }
}

/// Errors raised by the canvas engine collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    Mount(String),
    Engine(String),
}

impl CanvasError {
    pub fn engine(message: impl Into<String>) -> Self {
        CanvasError::Engine(message.into())
    }
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Mount(e) => write!(f, "canvas mount error: {e}"),
            CanvasError::Engine(e) => write!(f, "canvas engine error: {e}"),
        }
    }
}

/// Errors from the workbench lifecycle controller.
#[derive(Debug)]
pub enum WorkbenchError {
    /// A required configuration slot was empty; names the first missing slot.
    MissingConfig(ConfigField),
    /// The canvas mount point was not found in the container after settling.
    MountPointMissing(&'static str),
    Canvas(CanvasError),
    Adapter(AdapterError),
}

impl fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkbenchError::MissingConfig(field) => {
                write!(f, "missing required configuration field '{}'", field.name())
            },
            WorkbenchError::MountPointMissing(id) => {
                write!(f, "canvas mount point '{id}' not found in container")
            },
            WorkbenchError::Canvas(e) => write!(f, "{e}"),
            WorkbenchError::Adapter(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WorkbenchError {}

impl From<CanvasError> for WorkbenchError {
    fn from(e: CanvasError) -> Self {
        WorkbenchError::Canvas(e)
    }
}

impl From<AdapterError> for WorkbenchError {
    fn from(e: AdapterError) -> Self {
        WorkbenchError::Adapter(e)
    }
}
