// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks for handler-produced blocks

use parking_lot::Mutex;
use std::io::{self, Write};

/// Destination for complete output blocks.
///
/// The sink is shared by every handler and every job. Implementations must
/// emit the whole block as a single write followed by an immediate flush so
/// that blocks from concurrently-running jobs never interleave mid-block.
pub trait OutputSink {
    fn write_block(&self, block: &str) -> io::Result<()>;
}

/// Sink writing to the process's standard output stream.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(block.as_bytes())?;
        out.flush()
    }
}

/// In-memory sink recording each block, for tests.
#[derive(Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks written so far, in write order.
    pub fn blocks(&self) -> Vec<String> {
        self.blocks.lock().clone()
    }
}

impl OutputSink for MemorySink {
    fn write_block(&self, block: &str) -> io::Result<()> {
        self.blocks.lock().push(block.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
