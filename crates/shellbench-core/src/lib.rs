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

//! Shellbench Core
//!
//! The two pure pieces of the Shell sort benchmark:
//!
//! - **Shell sort**: in-place gapped insertion sort that reports how many
//!   element shifts and placements it performed
//! - **Size sequence**: powers of ten spaced geometrically between two
//!   exponents, narrowed to sizes a native array can hold
//!
//! ## Usage
//!
//! ```
//! use shellbench_core::{geometric_sequence, narrow_sequence, shell_sort};
//!
//! let mut values = vec![5, 3, 4, 1, 2];
//! let stats = shell_sort(&mut values);
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//! assert_eq!(stats.iterations(), 13);
//!
//! let sizes = narrow_sequence(&geometric_sequence(1, 3, 3));
//! assert_eq!(sizes, vec![10, 100, 1_000]);
//! ```

pub mod sequence;
pub mod sort;

pub use sequence::{
    clamp_to_size, geometric_sequence, geometric_sizes, narrow_sequence, MAX_ARRAY_SIZE,
    MAX_EXPONENT,
};
pub use sort::{is_sorted_ascending, shell_sort, SortStats};
