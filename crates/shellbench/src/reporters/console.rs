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

//! Console status lines.
//!
//! One line per processed size, one per failure, and a closing pointer to the
//! report file.

use crate::error::BenchError;
use crate::reporters::types::SizeRecord;
use std::path::Path;

/// Progress line for a completed size.
pub fn format_status(record: &SizeRecord) -> String {
    format!(
        "Processed: {} elements | Iterations: {} | Time: {:.2} ms",
        record.size,
        record.iterations(),
        record.elapsed_ms()
    )
}

/// Progress line for a failed size.
pub fn format_status_error(size: usize, error: &BenchError) -> String {
    format!("Error at {} elements: {}", size, error)
}

/// Prints where the report was written.
pub fn print_saved(path: &Path) {
    println!("\nResults saved to: {}", path.display());
}
