/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Instance-scoped key/value state store with reset semantics.
//!
//! Each workbench instance owns exactly one store; no two instances share
//! one. The only reserved key is [`SUSPEND_AUTOSAVE`], a boolean gate that
//! suppresses persistence writes during bulk canvas reloads.

use std::collections::HashMap;

use serde_json::Value;

/// Reserved key gating persistence during bulk reloads.
pub const SUSPEND_AUTOSAVE: &str = "suspend_autosave";

#[derive(Debug, Default)]
pub struct StateStore {
    entries: HashMap<String, Value>,
}

impl StateStore {
    pub fn new() -> Self {
        let mut store = Self {
            entries: HashMap::new(),
        };
        store.apply_defaults();
        store
    }

    fn apply_defaults(&mut self) {
        self.entries
            .insert(SUSPEND_AUTOSAVE.to_string(), Value::Bool(false));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn suspend_autosave(&self) -> bool {
        self.entries
            .get(SUSPEND_AUTOSAVE)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn set_suspend_autosave(&mut self, suspended: bool) {
        self.entries
            .insert(SUSPEND_AUTOSAVE.to_string(), Value::Bool(suspended));
    }

    /// Drop every entry and restore initial defaults.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.apply_defaults();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
