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

//! Benchmark runner for executing and reporting each size.

use crate::core::config::BenchConfig;
use crate::core::measure;
use crate::dataset::ArrayGenerator;
use crate::error::Result;
use crate::reporters::text::{self, TextReport, SORTED_LABEL, SOURCE_LABEL};
use crate::reporters::types::{RunSummary, SizeOutcome, SizeRecord};
use crate::reporters::{format_status, format_status_error};
use shellbench_core::shell_sort;
use std::io::Write;
use tracing::{debug, info, warn};

/// Runs the Shell sort benchmark over a size sequence.
///
/// Sizes are processed strictly in order. A failure on one size is written to
/// the report and the status stream, then the next size starts.
pub struct BenchmarkRunner<W: Write> {
    config: BenchConfig,
    report: TextReport,
    status: W,
    generator: ArrayGenerator,
}

impl<W: Write> BenchmarkRunner<W> {
    /// Creates a runner writing blocks to `report` and progress lines to
    /// `status`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if `config` fails validation.
    ///
    /// [`BenchError::InvalidConfig`]: crate::error::BenchError::InvalidConfig
    pub fn new(config: BenchConfig, report: TextReport, status: W) -> Result<Self> {
        config.validate()?;
        let generator = ArrayGenerator::new(config.value_range.clone(), config.seed)?;
        Ok(Self {
            config,
            report,
            status,
            generator,
        })
    }

    /// Writes the report title and benchmarks every configured size.
    ///
    /// # Errors
    ///
    /// Returns an error only if the title cannot be written. Per-size
    /// failures are recorded in the returned summary.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.report.append(&text::format_title(
            self.config.start_exponent,
            self.config.end_exponent,
        ))?;

        let sizes = self.config.sizes();
        info!(
            count = sizes.len(),
            path = %self.report.path().display(),
            "starting shell sort benchmark"
        );

        let summary = self.run_sizes(&sizes);
        info!(
            completed = summary.completed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "benchmark finished"
        );
        Ok(summary)
    }

    /// Benchmarks the given sizes in order.
    pub fn run_sizes(&mut self, sizes: &[usize]) -> RunSummary {
        let mut summary = RunSummary::default();

        for &size in sizes {
            if size == 0 {
                debug!("skipping empty size");
                summary.outcomes.push(SizeOutcome::Skipped { size });
                continue;
            }

            let outcome = match self.process_size(size) {
                Ok(record) => {
                    self.emit_status(&format_status(&record));
                    SizeOutcome::Completed(record)
                }
                Err(error) => {
                    if let Err(e) = self.report.append(&text::format_error(size, &error)) {
                        warn!(size, error = %e, "failed to write error line to report");
                    }
                    self.emit_status(&format_status_error(size, &error));
                    SizeOutcome::Failed { size, error }
                }
            };
            summary.outcomes.push(outcome);
        }

        summary
    }

    /// Returns the status writer, consuming the runner.
    pub fn into_status(self) -> W {
        self.status
    }

    fn process_size(&mut self, size: usize) -> Result<SizeRecord> {
        let truncated = self.config.is_truncated(size);
        let preview_len = self.config.preview_len;

        let mut values = self.generator.generate(size)?;

        let mut block = text::format_header(size, truncated, preview_len);
        block.push_str(&text::format_snapshot(
            SOURCE_LABEL,
            &text::timestamp(),
            &values,
            truncated,
            preview_len,
        ));
        self.report.append(&block)?;

        let (stats, measurement) = measure(|| shell_sort(&mut values));
        let record = SizeRecord::new(size, stats, measurement);
        debug!(
            size,
            iterations = record.iterations(),
            elapsed_ms = record.elapsed_ms(),
            "sorted"
        );

        let mut block = text::format_snapshot(
            SORTED_LABEL,
            &text::timestamp(),
            &values,
            truncated,
            preview_len,
        );
        block.push_str(&text::format_stats_table(&record));
        self.report.append(&block)?;

        Ok(record)
    }

    fn emit_status(&mut self, line: &str) {
        if let Err(e) = writeln!(self.status, "{}", line) {
            warn!(error = %e, "failed to write status line");
        }
    }
}
