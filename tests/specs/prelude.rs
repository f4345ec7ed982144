//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use kiln_core::{JobEvent, JobId, ResultCode};
use kiln_engine::{ConsoleStdoutOnFailure, Dispatcher, MemorySink};
use std::sync::Arc;

/// Dispatcher with a `ConsoleStdoutOnFailure` handler wired to a shared
/// in-memory sink, enabled as the host would enable it.
pub fn failure_output_dispatcher() -> (Arc<MemorySink>, Dispatcher) {
    let sink = Arc::new(MemorySink::new());
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(ConsoleStdoutOnFailure::new(sink.clone())));
    dispatcher
        .enable(ConsoleStdoutOnFailure::NAME)
        .expect("handler is registered");
    (sink, dispatcher)
}

pub fn stdout_line(job: &str, text: &str) -> JobEvent {
    JobEvent::StdoutLine {
        job: JobId::new(job),
        line: text.as_bytes().to_vec(),
    }
}

pub fn job_ended(job: &str, identifier: &str, rc: i32) -> JobEvent {
    JobEvent::JobEnded {
        job: JobId::new(job),
        identifier: identifier.to_string(),
        rc: ResultCode(rc),
    }
}
