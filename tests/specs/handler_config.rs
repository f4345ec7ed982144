//! Handler configuration: the host's TOML config toggles handlers by name.

use crate::prelude::*;
use kiln_engine::{ConsoleStdoutOnFailure, Dispatcher, HandlersConfig, MemorySink};
use similar_asserts::assert_eq;
use std::sync::Arc;

fn registered_dispatcher() -> (Arc<MemorySink>, Dispatcher) {
    let sink = Arc::new(MemorySink::new());
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(ConsoleStdoutOnFailure::new(sink.clone())));
    (sink, dispatcher)
}

#[test]
fn config_enables_failure_output() {
    let (sink, mut dispatcher) = registered_dispatcher();

    let config = HandlersConfig::from_toml(
        "[handlers]\nconsole_stdout_on_failure = true\n",
    )
    .unwrap();
    config.apply(&mut dispatcher).unwrap();

    dispatcher.dispatch(&stdout_line("pkg-a", "boom\n")).unwrap();
    dispatcher.dispatch(&job_ended("pkg-a", "geometry", 1)).unwrap();

    assert_eq!(sink.blocks(), vec!["--- stdout: geometry\nboom\n---".to_string()]);
}

#[test]
fn config_can_disable_again() {
    let (sink, mut dispatcher) = registered_dispatcher();
    dispatcher.enable(ConsoleStdoutOnFailure::NAME).unwrap();

    let config = HandlersConfig::from_toml(
        "[handlers]\nconsole_stdout_on_failure = false\n",
    )
    .unwrap();
    config.apply(&mut dispatcher).unwrap();

    dispatcher.dispatch(&stdout_line("pkg-a", "boom\n")).unwrap();
    dispatcher.dispatch(&job_ended("pkg-a", "geometry", 1)).unwrap();

    assert_eq!(sink.blocks(), Vec::<String>::new());
}

#[test]
fn absent_config_leaves_default_off() {
    let (sink, mut dispatcher) = registered_dispatcher();

    HandlersConfig::from_toml("").unwrap().apply(&mut dispatcher).unwrap();

    dispatcher.dispatch(&stdout_line("pkg-a", "boom\n")).unwrap();
    dispatcher.dispatch(&job_ended("pkg-a", "geometry", 1)).unwrap();

    assert_eq!(sink.blocks(), Vec::<String>::new());
}
