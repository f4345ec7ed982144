// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler enable/disable configuration

use crate::dispatcher::Dispatcher;
use crate::error::HandlerError;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors parsing handler configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid handlers config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-handler enabled flags, parsed from the orchestrator's config file:
///
/// ```toml
/// [handlers]
/// console_stdout_on_failure = true
/// ```
///
/// Handlers not named keep their default state.
#[derive(Debug, Default, Deserialize)]
pub struct HandlersConfig {
    #[serde(default)]
    handlers: HashMap<String, bool>,
}

impl HandlersConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// The configured flag for a handler, if any.
    pub fn enabled(&self, name: &str) -> Option<bool> {
        self.handlers.get(name).copied()
    }

    /// Toggle every named handler on the dispatcher.
    ///
    /// Fails with [`HandlerError::UnknownHandler`] if the config names a
    /// handler that is not registered.
    pub fn apply(&self, dispatcher: &mut Dispatcher) -> Result<(), HandlerError> {
        for (name, &enabled) in &self.handlers {
            if enabled {
                dispatcher.enable(name)?;
            } else {
                dispatcher.disable(name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
