// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln execution engine: event dispatch and console output handlers

mod config;
mod dispatcher;
mod error;
mod handler;
mod sink;
mod stdout_on_failure;

pub use config::{ConfigError, HandlersConfig};
pub use dispatcher::Dispatcher;
pub use error::HandlerError;
pub use handler::{EventHandler, DEFAULT_PRIORITY};
pub use sink::{MemorySink, OutputSink, StdoutSink};
pub use stdout_on_failure::ConsoleStdoutOnFailure;
