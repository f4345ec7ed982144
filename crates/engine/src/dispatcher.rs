// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-threaded cooperative event dispatch

use crate::error::HandlerError;
use crate::handler::EventHandler;
use kiln_core::JobEvent;

/// Delivers each event to every enabled handler, synchronously, in
/// descending priority order (registration order breaks ties).
///
/// Dispatch takes `&mut self`, so there is never concurrent reentrancy into
/// a handler; handler state needs no locking.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers keep whatever enabled state they were
    /// constructed with; use [`Dispatcher::enable`] or a
    /// [`crate::HandlersConfig`] to turn them on.
    pub fn register(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
        // Stable sort keeps registration order within a priority
        self.handlers.sort_by_key(|h| std::cmp::Reverse(h.priority()));
    }

    pub fn enable(&mut self, name: &str) -> Result<(), HandlerError> {
        self.set_enabled(name, true)
    }

    pub fn disable(&mut self, name: &str) -> Result<(), HandlerError> {
        self.set_enabled(name, false)
    }

    fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), HandlerError> {
        let handler = self
            .handlers
            .iter_mut()
            .find(|h| h.name() == name)
            .ok_or_else(|| HandlerError::UnknownHandler(name.to_string()))?;
        handler.set_enabled(enabled);
        Ok(())
    }

    /// Deliver one event to every enabled handler.
    ///
    /// A handler error aborts dispatch of this event and propagates;
    /// handlers already invoked keep their state changes.
    pub fn dispatch(&mut self, event: &JobEvent) -> Result<(), HandlerError> {
        tracing::debug!(event = %event.log_summary(), "dispatch");
        for handler in self.handlers.iter_mut().filter(|h| h.enabled()) {
            if let Err(e) = handler.handle(event) {
                tracing::warn!(
                    handler = handler.name(),
                    error = %e,
                    "handler failed"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
