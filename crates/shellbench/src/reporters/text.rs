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

//! Plain-text report file.
//!
//! The report is truncated once when created and only appended to afterwards.
//! Each append opens the file, writes one chunk and closes it again, so a
//! crash mid-run leaves every finished block on disk.
//!
//! # Layout
//!
//! ```text
//! SHELL SORT RESULTS (10^1 to 10^9)
//!
//! === ARRAY SIZE: 10 elements ===
//! Source array (2025-06-01 12:00:00):
//! 53121 10442 ...
//!
//! Sorted array (2025-06-01 12:00:00):
//! 10442 53121 ...
//!
//! | Array size     | Iterations | Time (ms)  |
//! |----------------|------------|------------|
//! |             10 |         31 |     0.0012 |
//!
//! ```

use crate::error::{BenchError, Result};
use crate::reporters::types::SizeRecord;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker appended to a truncated array line.
pub const TRUNCATION_MARKER: &str = "...";

/// Label of the pre-sort snapshot.
pub const SOURCE_LABEL: &str = "Source array";

/// Label of the post-sort snapshot.
pub const SORTED_LABEL: &str = "Sorted array";

/// Timestamp format for snapshot lines.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only report file.
#[derive(Debug, Clone)]
pub struct TextReport {
    path: PathBuf,
}

impl TextReport {
    /// Creates the parent directory and truncates or creates the file.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Io`] if the directory or file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BenchError::io_error(parent, e))?;
        }
        File::create(&path).map_err(|e| BenchError::io_error(&path, e))?;

        Ok(Self { path })
    }

    /// Report location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text` to the end of the report.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BenchError::io_error(&self.path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| BenchError::io_error(&self.path, e))
    }
}

/// Current local time formatted for snapshot lines.
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Report title naming the exponent range.
pub fn format_title(start_exponent: u32, end_exponent: u32) -> String {
    format!(
        "SHELL SORT RESULTS (10^{} to 10^{})\n\n",
        start_exponent, end_exponent
    )
}

/// Block header line.
pub fn format_header(size: usize, truncated: bool, preview_len: usize) -> String {
    if truncated {
        format!(
            "=== ARRAY SIZE: {} elements (first {} shown) ===\n",
            size, preview_len
        )
    } else {
        format!("=== ARRAY SIZE: {} elements ===\n", size)
    }
}

/// Labelled, timestamped array snapshot followed by a blank line.
///
/// When `truncated`, only the first `preview_len` values are printed and
/// [`TRUNCATION_MARKER`] is appended.
pub fn format_snapshot(
    label: &str,
    timestamp: &str,
    values: &[i32],
    truncated: bool,
    preview_len: usize,
) -> String {
    let shown = if truncated {
        &values[..preview_len.min(values.len())]
    } else {
        values
    };

    let joined = shown
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let marker = if truncated { TRUNCATION_MARKER } else { "" };

    format!("{} ({}):\n{}{}\n\n", label, timestamp, joined, marker)
}

/// Statistics table for one completed size, followed by a blank line.
pub fn format_stats_table(record: &SizeRecord) -> String {
    format!(
        "| {:<14} | {:<10} | {:<10} |\n|{}|{}|{}|\n| {:>14} | {:>10} | {:>10.4} |\n\n",
        "Array size",
        "Iterations",
        "Time (ms)",
        "-".repeat(16),
        "-".repeat(12),
        "-".repeat(12),
        record.size,
        record.iterations(),
        record.elapsed_ms()
    )
}

/// Error line written in place of a block's remaining sections.
pub fn format_error(size: usize, error: &BenchError) -> String {
    format!("Error processing array of {} elements: {}\n\n", size, error)
}
