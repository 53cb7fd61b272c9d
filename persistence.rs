/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Persistence coordinator: serializes canvas state into the external
//! state adapter.
//!
//! The write is suppressed while the suspend-autosave flag is set, and when
//! the requesting generation is no longer current (a newer load started
//! after the request was issued). Both suppressions are quiet no-ops.

use log::debug;

use crate::canvas::CanvasEngine;
use crate::error::WorkbenchError;
use crate::host::StateAdapter;

/// State-adapter key holding the element snapshot for `iri`.
pub(crate) fn ontology_key(iri: &str) -> String {
    format!("ontology:{iri}")
}

/// State-adapter key holding persisted node positions for `iri`.
pub(crate) fn layout_key(iri: &str) -> String {
    format!("layout:{iri}")
}

pub(crate) struct PersistRequest<'a> {
    pub(crate) canvas: &'a dyn CanvasEngine,
    pub(crate) iri: &'a str,
    pub(crate) state: &'a dyn StateAdapter,
    pub(crate) suspended: bool,
    /// Load generation current when the request was issued.
    pub(crate) generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PersistOutcome {
    Written,
    SkippedSuspended,
    SkippedStale,
}

/// Serialize the canvas and write it under the ontology/layout keys,
/// unless suspended or stale.
pub(crate) fn persist_graph(
    request: PersistRequest<'_>,
    current_generation: u64,
) -> Result<PersistOutcome, WorkbenchError> {
    if request.suspended {
        debug!("persist for '{}' skipped: autosave suspended", request.iri);
        return Ok(PersistOutcome::SkippedSuspended);
    }
    if request.generation != current_generation {
        debug!(
            "persist for '{}' skipped: stale generation {} (current {})",
            request.iri, request.generation, current_generation
        );
        return Ok(PersistOutcome::SkippedStale);
    }

    let snapshot = request.canvas.snapshot()?;
    let elements = match snapshot.get("elements") {
        Some(elements) => elements.clone(),
        None => snapshot.clone(),
    };
    request
        .state
        .set(&ontology_key(request.iri), elements)
        .map_err(WorkbenchError::Adapter)?;
    if let Some(positions) = snapshot.get("positions") {
        request
            .state
            .set(&layout_key(request.iri), positions.clone())
            .map_err(WorkbenchError::Adapter)?;
    }
    Ok(PersistOutcome::Written)
}
