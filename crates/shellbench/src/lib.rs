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

//! Shell Sort Benchmark
//!
//! Sorts random integer arrays across sizes spanning many orders of magnitude
//! and records iteration counts and elapsed time to a plain-text report.
//!
//! ## Features
//!
//! - **Size sequence**: powers of ten spaced geometrically, clamped to `i32::MAX`
//! - **Per-size isolation**: a failing size is logged and the run continues
//! - **Bounded reports**: very large arrays are printed as a short prefix
//!
//! ## Usage
//!
//! Run with the standard setup (sizes `10^1` to `10^9`):
//! ```bash
//! cargo run --release --package shellbench
//! ```
//!
//! Smaller, reproducible run:
//! ```bash
//! cargo run --release --package shellbench -- --end-exponent 5 --count 20 --seed 1
//! ```
//!
//! Diagnostic logging goes to stderr and is controlled by `RUST_LOG`.

pub mod cli;
pub mod core;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod reporters;

pub use crate::core::{BenchConfig, Measurement};
pub use dataset::ArrayGenerator;
pub use error::{BenchError, Result};
pub use harness::BenchmarkRunner;
pub use reporters::{RunSummary, SizeOutcome, SizeRecord, TextReport};
