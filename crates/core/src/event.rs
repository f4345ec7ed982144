// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types for the kiln build orchestrator
//!
//! The dispatcher delivers events for a single job in program order: every
//! `job:stdout` event precedes that job's `job:ended` event. Events for
//! different jobs may interleave arbitrarily, which is why handlers that
//! want unbroken output must buffer per job.

use crate::job::JobId;
use crate::result::ResultCode;
use serde::{Deserialize, Serialize};

/// Events emitted over a job's lifecycle.
///
/// Serializes with `{"type": "job:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JobEvent {
    /// One chunk of raw bytes captured from the job's stdout.
    #[serde(rename = "job:stdout")]
    StdoutLine { job: JobId, line: Vec<u8> },

    /// The job's process ended.
    #[serde(rename = "job:ended")]
    JobEnded {
        job: JobId,
        /// Human-readable identifier shown in output headers
        identifier: String,
        rc: ResultCode,
    },
}

impl JobEvent {
    pub fn name(&self) -> &str {
        match self {
            JobEvent::StdoutLine { .. } => "job:stdout",
            JobEvent::JobEnded { .. } => "job:ended",
        }
    }

    /// The job this event originated from.
    pub fn job(&self) -> &JobId {
        match self {
            JobEvent::StdoutLine { job, .. } => job,
            JobEvent::JobEnded { job, .. } => job,
        }
    }

    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            JobEvent::StdoutLine { job, line } => {
                format!("{t} job={job} bytes={}", line.len())
            }
            JobEvent::JobEnded {
                job,
                identifier,
                rc,
            } => format!("{t} job={job} id={identifier} rc={rc}"),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
