/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph-loading collaborator: populate the canvas for an ontology IRI.
//!
//! Owns the cache/API fallback policy: a snapshot cached under the
//! ontology key is used when present and well-formed, otherwise the API
//! adapter is asked and the result is cached back. Persisted layout
//! positions are applied when available.

use log::{debug, warn};
use serde_json::Value;

use crate::canvas::CanvasEngine;
use crate::error::WorkbenchError;
use crate::host::{ApiAdapter, StateAdapter};
use crate::persistence::{layout_key, ontology_key};

/// Refresh steps the caller owes its UI after population milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Refresh {
    CanvasViewport,
    Tree,
}

pub(crate) struct LoadArgs<'a> {
    pub(crate) canvas: &'a mut dyn CanvasEngine,
    pub(crate) state: &'a dyn StateAdapter,
    pub(crate) api: &'a dyn ApiAdapter,
}

fn usable_snapshot(value: &Value) -> bool {
    value.is_array() || value.is_object()
}

/// Populate `canvas` with the element set for `iri`, cache-first with API
/// fallback, then apply persisted layout and request UI refreshes.
pub(crate) async fn load_ontology(
    args: LoadArgs<'_>,
    iri: &str,
    mut on_refresh: impl FnMut(Refresh),
) -> Result<(), WorkbenchError> {
    let cached = args
        .state
        .get(&ontology_key(iri))
        .filter(|value| {
            if usable_snapshot(value) {
                true
            } else {
                warn!("ignoring cached snapshot for '{iri}': invalid shape");
                false
            }
        });

    let elements = match cached {
        Some(elements) => {
            debug!("loading '{iri}' from cached snapshot");
            elements
        },
        None => {
            let fetched = args
                .api
                .fetch_ontology(iri)
                .await
                .map_err(WorkbenchError::Adapter)?;
            // Cache write-back is best effort; a failed write must not
            // abort the load.
            if let Err(e) = args.state.set(&ontology_key(iri), fetched.clone()) {
                warn!("caching snapshot for '{iri}' failed: {e}");
            }
            fetched
        },
    };

    args.canvas.add_elements(&elements)?;

    if let Some(positions) = args.state.get(&layout_key(iri))
        && let Err(e) = args.canvas.apply_layout(&positions)
    {
        warn!("applying persisted layout for '{iri}' failed: {e}");
    }

    if let Err(e) = args.canvas.refresh_viewport() {
        warn!("viewport refresh after loading '{iri}' failed: {e}");
    }
    on_refresh(Refresh::CanvasViewport);
    on_refresh(Refresh::Tree);
    Ok(())
}
