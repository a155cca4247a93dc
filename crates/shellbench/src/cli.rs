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

//! Command-line arguments.
//!
//! Every flag defaults to the standard benchmark setup, so running with no
//! arguments benchmarks 100 sizes from `10^1` to `10^9`.

use crate::core::config::{
    BenchConfig, DEFAULT_COUNT, DEFAULT_END_EXPONENT, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE,
    DEFAULT_OUTPUT_PATH, DEFAULT_PREVIEW_LEN, DEFAULT_PREVIEW_THRESHOLD, DEFAULT_START_EXPONENT,
};
use crate::error::Result;
use crate::harness::BenchmarkRunner;
use crate::reporters::{print_saved, RunSummary, TextReport};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Shell sort scaling benchmark
///
/// Sorts random integer arrays of geometrically increasing size and records
/// iteration counts and timings in a plain-text report.
#[derive(Parser, Debug)]
#[command(name = "shellbench")]
#[command(author, version, about = "Shell sort scaling benchmark", long_about = None)]
pub struct Cli {
    /// Report file path (truncated at start)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Exponent of the smallest array size
    #[arg(long, default_value_t = DEFAULT_START_EXPONENT)]
    pub start_exponent: u32,

    /// Exponent of the largest array size
    #[arg(long, default_value_t = DEFAULT_END_EXPONENT)]
    pub end_exponent: u32,

    /// Number of array sizes
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Smallest element value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    pub min_value: i32,

    /// Largest element value (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, allow_hyphen_values = true)]
    pub max_value: i32,

    /// Arrays larger than this are printed truncated
    #[arg(long, default_value_t = DEFAULT_PREVIEW_THRESHOLD)]
    pub preview_threshold: usize,

    /// Number of elements printed for a truncated array
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    pub preview_len: usize,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Builds the run configuration from the parsed arguments.
    pub fn to_config(&self) -> BenchConfig {
        let config = BenchConfig::new(&self.output)
            .with_exponents(self.start_exponent, self.end_exponent)
            .with_count(self.count)
            .with_value_range(self.min_value..self.max_value)
            .with_preview(self.preview_threshold, self.preview_len);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Validates the configuration, prepares the report and runs every size.
    ///
    /// Status lines go to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration or when the report file
    /// cannot be created. Per-size failures do not produce an error.
    pub fn execute(&self) -> Result<RunSummary> {
        let config = self.to_config();
        config.validate()?;

        let report = TextReport::create(&config.output_path)?;
        let path = report.path().to_path_buf();

        let summary = {
            let mut runner = BenchmarkRunner::new(config, report, io::stdout().lock())?;
            runner.run()?
        };

        print_saved(&path);
        Ok(summary)
    }
}
