// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event engine

use thiserror::Error;

/// Errors that can occur while dispatching or handling events
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("output sink write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown handler: {0}")]
    UnknownHandler(String),
}
