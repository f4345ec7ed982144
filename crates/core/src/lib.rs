// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln-core: Event model for the kiln build orchestrator

pub mod event;
pub mod job;
pub mod result;

pub use event::JobEvent;
pub use job::JobId;
pub use result::{ResultCode, SIGINT_RESULT};
