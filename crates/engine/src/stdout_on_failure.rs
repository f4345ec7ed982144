// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console handler that shows a failed job's stdout all at once.
//!
//! Output is batched per job until the job has ended so that output from
//! parallel jobs is never interleaved. Jobs that succeed, or that were
//! aborted with SIGINT, produce no output at all.

use crate::error::HandlerError;
use crate::handler::EventHandler;
use crate::sink::OutputSink;
use kiln_core::{JobEvent, JobId};
use std::collections::HashMap;
use std::sync::Arc;

/// Buffers captured stdout per job and, when the job ends, prints the whole
/// buffer as one block — only if the job failed and was not interrupted.
pub struct ConsoleStdoutOnFailure {
    sink: Arc<dyn OutputSink>,
    buffers: HashMap<JobId, Vec<Vec<u8>>>,
    enabled: bool,
}

impl ConsoleStdoutOnFailure {
    pub const NAME: &'static str = "console_stdout_on_failure";

    /// Slightly above the default priority so failure output reaches the
    /// console before lower-priority peers see the end event.
    pub const PRIORITY: i32 = 110;

    /// Create the handler. Disabled by default; the host enables it through
    /// its handler configuration.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            sink,
            buffers: HashMap::new(),
            enabled: false,
        }
    }

    /// Number of jobs with buffered output. Buffers are released on each
    /// job's end event, so this tracks only still-running jobs.
    pub fn pending_jobs(&self) -> usize {
        self.buffers.len()
    }

    fn emit(&self, identifier: &str, chunks: &[Vec<u8>]) -> Result<(), HandlerError> {
        let bytes = chunks.concat();
        let mut block = format!("--- stdout: {identifier}\n");
        // Invalid UTF-8 in captured output is replaced, never fatal
        block.push_str(&String::from_utf8_lossy(&bytes));
        block.push_str("---");
        self.sink.write_block(&block)?;
        Ok(())
    }
}

impl EventHandler for ConsoleStdoutOnFailure {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn handle(&mut self, event: &JobEvent) -> Result<(), HandlerError> {
        match event {
            JobEvent::StdoutLine { job, line } => {
                self.buffers.entry(job.clone()).or_default().push(line.clone());
                Ok(())
            }
            JobEvent::JobEnded {
                job,
                identifier,
                rc,
            } => {
                // Buffer is released whether or not anything is printed. A
                // second end event for the same job finds nothing and is a
                // no-op.
                let Some(chunks) = self.buffers.remove(job) else {
                    return Ok(());
                };
                if rc.is_failure() {
                    self.emit(identifier, &chunks)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "stdout_on_failure_tests.rs"]
mod tests;
