// Shellbench - Shell sort scaling benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for Shell sort benchmarking.
//!
//! Every fallible step of a run returns [`BenchError`]. Per-size failures are
//! recorded in the report and the run continues; only configuration and
//! report setup errors end the process.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Report file could not be created or appended to.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Report path
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// The working array could not be allocated.
    #[error("cannot allocate array of {size} elements: {message}")]
    Allocation {
        /// Requested element count
        size: usize,
        /// Allocator error message
        message: String,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl BenchError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = BenchError::io_error(
            "results/out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results/out.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_allocation_display() {
        let err = BenchError::Allocation {
            size: 1_000_000_000,
            message: "memory allocation failed".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("1000000000"));
        assert!(msg.contains("memory allocation failed"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = BenchError::invalid_config("count", "must be positive");
        let msg = format!("{}", err);
        assert!(msg.contains("count"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = BenchError::invalid_config("count", "zero");
        let err2 = BenchError::invalid_config("count", "zero");
        let err3 = BenchError::invalid_config("preview_len", "zero");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
