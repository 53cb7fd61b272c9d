/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Workbench construction configuration: injected adapter slots plus
//! option overrides.

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasFactory;
use crate::host::{ApiAdapter, EventAdapter, StateAdapter, UiContainer};

/// Merged workbench options. Defaults are
/// `{autosave: true, snap_to_grid: true, grid_size: 20}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchOptions {
    pub autosave: bool,
    pub snap_to_grid: bool,
    pub grid_size: u32,
}

impl Default for WorkbenchOptions {
    fn default() -> Self {
        Self {
            autosave: true,
            snap_to_grid: true,
            grid_size: 20,
        }
    }
}

impl WorkbenchOptions {
    /// Merge defaults with caller overrides; caller values win per key.
    pub fn merged(overrides: &OptionOverrides) -> Self {
        let defaults = Self::default();
        Self {
            autosave: overrides.autosave.unwrap_or(defaults.autosave),
            snap_to_grid: overrides.snap_to_grid.unwrap_or(defaults.snap_to_grid),
            grid_size: overrides.grid_size.unwrap_or(defaults.grid_size),
        }
    }
}

/// Caller-supplied partial overrides of [`WorkbenchOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub autosave: Option<bool>,
    pub snap_to_grid: Option<bool>,
    pub grid_size: Option<u32>,
}

/// Construction record for [`crate::Workbench`]. All adapter slots are
/// required; validation order and the error naming the first missing slot
/// live in `Workbench::new`.
#[derive(Default)]
pub struct WorkbenchConfig {
    pub container: Option<Box<dyn UiContainer>>,
    pub api_adapter: Option<Box<dyn ApiAdapter>>,
    pub state_adapter: Option<Box<dyn StateAdapter>>,
    pub event_adapter: Option<Box<dyn EventAdapter>>,
    pub canvas_factory: Option<Box<CanvasFactory>>,
    pub options: OptionOverrides,
}

impl WorkbenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, container: Box<dyn UiContainer>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_api_adapter(mut self, adapter: Box<dyn ApiAdapter>) -> Self {
        self.api_adapter = Some(adapter);
        self
    }

    pub fn with_state_adapter(mut self, adapter: Box<dyn StateAdapter>) -> Self {
        self.state_adapter = Some(adapter);
        self
    }

    pub fn with_event_adapter(mut self, adapter: Box<dyn EventAdapter>) -> Self {
        self.event_adapter = Some(adapter);
        self
    }

    pub fn with_canvas_factory(mut self, factory: Box<CanvasFactory>) -> Self {
        self.canvas_factory = Some(factory);
        self
    }

    pub fn with_options(mut self, options: OptionOverrides) -> Self {
        self.options = options;
        self
    }
}
