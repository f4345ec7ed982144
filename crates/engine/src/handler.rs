// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handler extension point

use crate::error::HandlerError;
use kiln_core::JobEvent;

/// Priority assigned to handlers that don't override [`EventHandler::priority`].
pub const DEFAULT_PRIORITY: i32 = 100;

/// A stateful callback subscribed to the orchestrator's event stream.
///
/// The dispatcher delivers events one at a time with no concurrent
/// reentrancy, so implementations need no internal locking. `handle` must
/// process each event to completion without blocking.
///
/// Callers guarantee that all `job:stdout` events for a job are delivered
/// before that job's `job:ended` event.
pub trait EventHandler {
    /// Stable registration name, used by config and enable/disable calls.
    fn name(&self) -> &'static str;

    /// Dispatch ordering among peers; higher runs first.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    fn enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Process one event. Errors abort dispatch of the event and propagate.
    fn handle(&mut self, event: &JobEvent) -> Result<(), HandlerError>;
}
