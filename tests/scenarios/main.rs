/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! End-to-end scenarios over a workbench wired against fake host adapters.

mod bus_api;
mod lifecycle;

#[test]
fn scenarios_binary_smoke_runs() {
    assert!(!ontology_workbench::VERSION.is_empty());
}
