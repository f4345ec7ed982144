// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job result codes

use serde::{Deserialize, Serialize};

/// Result code for a job killed by a user-initiated interrupt (SIGINT).
///
/// Negative signal number, the value the platform reports for a child
/// terminated by signal 2. Only this exact value counts as "interrupted";
/// other negative codes are ordinary failures.
pub const SIGINT_RESULT: i32 = -2;

/// Result code reported on a job-end event.
///
/// `0` is success, [`SIGINT_RESULT`] is a user-initiated interrupt, and
/// everything else is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCode(pub i32);

impl ResultCode {
    pub const SUCCESS: ResultCode = ResultCode(0);
    pub const INTERRUPTED: ResultCode = ResultCode(SIGINT_RESULT);

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }

    pub fn is_interrupt(&self) -> bool {
        self.0 == SIGINT_RESULT
    }

    /// True for every code that is neither success nor the interrupt
    /// sentinel, including other negative signal codes.
    pub fn is_failure(&self) -> bool {
        !self.is_success() && !self.is_interrupt()
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ResultCode {
    fn from(rc: i32) -> Self {
        Self(rc)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
