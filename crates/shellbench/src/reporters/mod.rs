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

//! Benchmark reporters.
//!
//! # Modules
//!
//! - `types`: Per-size records and run summaries
//! - `text`: Append-only plain-text report file
//! - `console`: Live status lines

pub mod console;
pub mod text;
pub mod types;

pub use console::{format_status, format_status_error, print_saved};
pub use text::TextReport;
pub use types::{RunSummary, SizeOutcome, SizeRecord};
