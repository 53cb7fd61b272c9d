/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Internal publish/subscribe registry scoped to one workbench instance.
//!
//! Handlers are dispatched in registration order. A failing handler is
//! logged and skipped; it never blocks later handlers or the emitter.
//! Removing the last handler for an event drops the event's entry entirely,
//! so transient subscriptions do not grow the registry.

use std::collections::HashMap;

use log::warn;
use serde_json::Value;

/// Subscriber callback. Errors are caught and logged per handler.
pub type BusHandler = Box<dyn FnMut(&Value) -> Result<(), String>>;

/// Token returned by [`EventBus::on`]; redeeming it twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    event: String,
    id: u64,
}

impl Subscription {
    pub fn event(&self) -> &str {
        &self.event
    }
}

#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<String, Vec<(u64, BusHandler)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`. Each registration is a distinct
    /// entry; the returned token unsubscribes exactly this registration.
    pub fn on(&mut self, event: impl Into<String>, handler: BusHandler) -> Subscription {
        let event = event.into();
        let id = self.next_id;
        self.next_id += 1;
        self.handlers
            .entry(event.clone())
            .or_default()
            .push((id, handler));
        Subscription { event, id }
    }

    /// Remove the registration behind `subscription`. Idempotent.
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        let Some(entries) = self.handlers.get_mut(&subscription.event) else {
            return;
        };
        entries.retain(|(id, _)| *id != subscription.id);
        if entries.is_empty() {
            self.handlers.remove(&subscription.event);
        }
    }

    /// Remove every handler registered for `event`.
    pub fn off(&mut self, event: &str) {
        self.handlers.remove(event);
    }

    /// Invoke every registered handler for `event` in registration order.
    /// A handler error is logged with the event name and does not stop
    /// dispatch to the remaining handlers.
    pub fn emit(&mut self, event: &str, data: &Value) {
        let Some(entries) = self.handlers.get_mut(event) else {
            return;
        };
        for (_, handler) in entries.iter_mut() {
            if let Err(e) = handler(data) {
                warn!("handler for '{event}' failed: {e}");
            }
        }
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }
}
