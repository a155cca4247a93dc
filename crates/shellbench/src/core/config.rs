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

//! Centralized benchmark configuration.
//!
//! Provides the report destination, size range, value range and report
//! truncation settings for a benchmark run.

use crate::error::{BenchError, Result};
use shellbench_core::{geometric_sizes, MAX_EXPONENT};
use std::ops::Range;
use std::path::PathBuf;

/// Default report location.
pub const DEFAULT_OUTPUT_PATH: &str = "results/shellsort_results.txt";

/// Default exponent of the smallest size (`10^1`).
pub const DEFAULT_START_EXPONENT: u32 = 1;

/// Default exponent of the largest size (`10^9`).
pub const DEFAULT_END_EXPONENT: u32 = 9;

/// Default number of sizes in the sequence.
pub const DEFAULT_COUNT: usize = 100;

/// Default lower bound (inclusive) for array elements.
pub const DEFAULT_MIN_VALUE: i32 = 10_000;

/// Default upper bound (exclusive) for array elements.
pub const DEFAULT_MAX_VALUE: i32 = 100_000;

/// Sizes above this are printed truncated in the report.
pub const DEFAULT_PREVIEW_THRESHOLD: usize = 100_000;

/// Elements printed for a truncated array.
pub const DEFAULT_PREVIEW_LEN: usize = 100;

/// Centralized benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use shellbench::core::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_output_path("out/results.txt")
///     .with_exponents(1, 5)
///     .with_count(20)
///     .with_seed(7);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Report file path.
    pub output_path: PathBuf,
    /// Exponent of the first size.
    pub start_exponent: u32,
    /// Exponent of the last size.
    pub end_exponent: u32,
    /// Number of sizes to generate.
    pub count: usize,
    /// Half-open range of element values.
    pub value_range: Range<i32>,
    /// Arrays larger than this are printed truncated.
    pub preview_threshold: usize,
    /// Number of leading elements printed when truncated.
    pub preview_len: usize,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// Creates a configuration writing to `output_path` with default ranges.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            start_exponent: DEFAULT_START_EXPONENT,
            end_exponent: DEFAULT_END_EXPONENT,
            count: DEFAULT_COUNT,
            value_range: DEFAULT_MIN_VALUE..DEFAULT_MAX_VALUE,
            preview_threshold: DEFAULT_PREVIEW_THRESHOLD,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
        }
    }

    /// Sets the report path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the exponent bounds of the size sequence.
    pub fn with_exponents(mut self, start: u32, end: u32) -> Self {
        self.start_exponent = start;
        self.end_exponent = end;
        self
    }

    /// Sets the number of sizes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the element value range.
    pub fn with_value_range(mut self, range: Range<i32>) -> Self {
        self.value_range = range;
        self
    }

    /// Sets the truncation threshold and prefix length.
    pub fn with_preview(mut self, threshold: usize, len: usize) -> Self {
        self.preview_threshold = threshold;
        self.preview_len = len;
        self
    }

    /// Sets a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter consistency.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] naming the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(BenchError::invalid_config("count", "must be at least 1"));
        }
        if self.end_exponent < self.start_exponent {
            return Err(BenchError::invalid_config(
                "end_exponent",
                format!(
                    "must not be below start exponent {} (got {})",
                    self.start_exponent, self.end_exponent
                ),
            ));
        }
        if self.end_exponent > MAX_EXPONENT {
            return Err(BenchError::invalid_config(
                "end_exponent",
                format!(
                    "must not exceed {} (got {})",
                    MAX_EXPONENT, self.end_exponent
                ),
            ));
        }
        if self.value_range.is_empty() {
            return Err(BenchError::invalid_config(
                "value_range",
                format!(
                    "{}..{} contains no values",
                    self.value_range.start, self.value_range.end
                ),
            ));
        }
        if self.preview_len == 0 {
            return Err(BenchError::invalid_config("preview_len", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns whether arrays of `size` are printed truncated.
    pub fn is_truncated(&self, size: usize) -> bool {
        size > self.preview_threshold
    }

    /// Computes the narrowed size sequence.
    pub fn sizes(&self) -> Vec<usize> {
        geometric_sizes(self.start_exponent, self.end_exponent, self.count)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.start_exponent, 1);
        assert_eq!(config.end_exponent, 9);
        assert_eq!(config.count, 100);
        assert_eq!(config.value_range, 10_000..100_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_sizes() {
        let sizes = BenchConfig::default().sizes();
        assert_eq!(sizes.len(), 100);
        assert_eq!(sizes[0], 10);
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_builder() {
        let config = BenchConfig::default()
            .with_output_path("custom/out.txt")
            .with_exponents(2, 4)
            .with_count(3)
            .with_value_range(0..10)
            .with_preview(50, 5)
            .with_seed(42);

        assert_eq!(config.output_path, PathBuf::from("custom/out.txt"));
        assert_eq!(config.sizes(), vec![100, 1_000, 10_000]);
        assert_eq!(config.value_range, 0..10);
        assert_eq!(config.seed, Some(42));
        assert!(config.is_truncated(51));
        assert!(!config.is_truncated(50));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let err = BenchConfig::default().with_count(0).validate().unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { ref parameter, .. } if parameter == "count"));
    }

    #[test]
    fn test_validate_rejects_reversed_exponents() {
        let err = BenchConfig::default()
            .with_exponents(5, 2)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("end_exponent"));
    }

    #[test]
    fn test_validate_exponent_cap() {
        assert!(BenchConfig::default()
            .with_exponents(1, 100)
            .validate()
            .is_ok());
        assert!(BenchConfig::default()
            .with_exponents(1, MAX_EXPONENT)
            .validate()
            .is_ok());

        let err = BenchConfig::default()
            .with_exponents(1, 3_000_000)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { ref parameter, .. } if parameter == "end_exponent"));
        assert!(err.to_string().contains("3000000"));
    }

    #[test]
    fn test_sizes_wide_range_clamped() {
        let sizes = BenchConfig::default().with_exponents(1, 100).sizes();
        assert_eq!(sizes.len(), 100);
        assert_eq!(sizes[0], 10);
        assert_eq!(sizes[99], i32::MAX as usize);
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_validate_rejects_empty_value_range() {
        let err = BenchConfig::default()
            .with_value_range(5..5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("value_range"));
    }

    #[test]
    fn test_validate_rejects_zero_preview_len() {
        assert!(BenchConfig::default().with_preview(10, 0).validate().is_err());
    }
}
