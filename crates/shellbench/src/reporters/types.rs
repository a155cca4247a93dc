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

//! Per-size results and run summaries.

use crate::core::Measurement;
use crate::error::BenchError;
use shellbench_core::SortStats;

/// Result of sorting one array.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRecord {
    /// Array size.
    pub size: usize,
    /// Operation counts from the sort.
    pub stats: SortStats,
    /// Time spent in the sort call.
    pub measurement: Measurement,
}

impl SizeRecord {
    /// Creates a new record.
    pub fn new(size: usize, stats: SortStats, measurement: Measurement) -> Self {
        Self {
            size,
            stats,
            measurement,
        }
    }

    /// Total iteration count (shifts plus placements).
    pub fn iterations(&self) -> u64 {
        self.stats.iterations()
    }

    /// Elapsed sort time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.measurement.as_millis_f64()
    }
}

/// What happened to one entry of the size sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeOutcome {
    /// Sorted and reported.
    Completed(SizeRecord),
    /// Non-positive size; nothing was written.
    Skipped {
        /// The skipped size.
        size: usize,
    },
    /// Processing stopped early; an error line was written instead.
    Failed {
        /// The failing size.
        size: usize,
        /// Why it failed.
        error: BenchError,
    },
}

impl SizeOutcome {
    /// The size this outcome refers to.
    pub fn size(&self) -> usize {
        match self {
            SizeOutcome::Completed(record) => record.size,
            SizeOutcome::Skipped { size } | SizeOutcome::Failed { size, .. } => *size,
        }
    }
}

/// Outcomes of a full run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// One entry per size in the sequence.
    pub outcomes: Vec<SizeOutcome>,
}

impl RunSummary {
    /// Iterates over completed records.
    pub fn records(&self) -> impl Iterator<Item = &SizeRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            SizeOutcome::Completed(record) => Some(record),
            _ => None,
        })
    }

    /// Number of sizes sorted and reported.
    pub fn completed(&self) -> usize {
        self.records().count()
    }

    /// Number of sizes that failed.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SizeOutcome::Failed { .. }))
            .count()
    }

    /// Number of sizes skipped.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SizeOutcome::Skipped { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn record(size: usize) -> SizeRecord {
        SizeRecord::new(
            size,
            SortStats {
                length: size,
                shifts: 2,
                placements: 3,
            },
            Measurement::new(Duration::from_millis(4)),
        )
    }

    #[test]
    fn test_record_accessors() {
        let r = record(10);
        assert_eq!(r.iterations(), 5);
        assert!((r.elapsed_ms() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_counts() {
        let summary = RunSummary {
            outcomes: vec![
                SizeOutcome::Skipped { size: 0 },
                SizeOutcome::Completed(record(10)),
                SizeOutcome::Failed {
                    size: 100,
                    error: BenchError::invalid_config("x", "y"),
                },
                SizeOutcome::Completed(record(1_000)),
            ],
        };

        assert_eq!(summary.completed(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.skipped(), 1);
        let sizes: Vec<usize> = summary.outcomes.iter().map(SizeOutcome::size).collect();
        assert_eq!(sizes, vec![0, 10, 100, 1_000]);
    }
}
