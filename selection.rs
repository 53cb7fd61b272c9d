/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Selection coordinator: translates element/edge ids into canvas selection
//! calls with a synchronous follow-up refresh callback.

use log::warn;

use crate::canvas::CanvasEngine;

/// Select a node on the canvas; `on_done` runs synchronously after the
/// selection completes. An unknown id is a delegated no-op inside the engine.
pub(crate) fn select_element(canvas: &mut dyn CanvasEngine, node_id: &str, on_done: impl FnOnce()) {
    match canvas.select_node(node_id) {
        Ok(()) => on_done(),
        Err(e) => warn!("node selection for '{node_id}' failed: {e}"),
    }
}

/// Edge counterpart of [`select_element`].
pub(crate) fn select_edge(canvas: &mut dyn CanvasEngine, edge_id: &str, on_done: impl FnOnce()) {
    match canvas.select_edge(edge_id) {
        Ok(()) => on_done(),
        Err(e) => warn!("edge selection for '{edge_id}' failed: {e}"),
    }
}
