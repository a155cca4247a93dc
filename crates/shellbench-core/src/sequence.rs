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

//! Geometric size sequences.
//!
//! Sizes are generated as arbitrary-precision powers of ten so that wide
//! exponent ranges (up to `10^100` and beyond) never overflow, then narrowed
//! to native array sizes by clamping.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Largest array size the benchmark will allocate (`i32::MAX`).
pub const MAX_ARRAY_SIZE: usize = i32::MAX as usize;

/// Largest exponent accepted for a size sequence.
///
/// Leaves room for `10^100` and keeps [`geometric_sequence`] entries small.
pub const MAX_EXPONENT: u32 = 1_000;

/// Generates `count` powers of ten between `10^start_exponent` and
/// `10^end_exponent`.
///
/// The exponent is interpolated linearly in floating point and truncated
/// toward zero before exponentiation, so neighbouring entries repeat when the
/// step is smaller than one.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use shellbench_core::geometric_sequence;
///
/// let seq = geometric_sequence(1, 2, 3);
/// assert_eq!(seq, vec![BigUint::from(10u32), BigUint::from(10u32), BigUint::from(100u32)]);
/// ```
pub fn geometric_sequence(start_exponent: u32, end_exponent: u32, count: usize) -> Vec<BigUint> {
    let ten = BigUint::from(10u32);
    interpolated_exponents(start_exponent, end_exponent, count)
        .map(|exp| ten.pow(exp))
        .collect()
}

/// Generates the same sequence as [`geometric_sequence`], already narrowed
/// to at most [`MAX_ARRAY_SIZE`].
///
/// No big integers are built, so the cost does not grow with the exponent.
///
/// # Example
///
/// ```
/// use shellbench_core::{geometric_sizes, MAX_ARRAY_SIZE};
///
/// assert_eq!(geometric_sizes(1, 100, 2), vec![10, MAX_ARRAY_SIZE]);
/// ```
pub fn geometric_sizes(start_exponent: u32, end_exponent: u32, count: usize) -> Vec<usize> {
    interpolated_exponents(start_exponent, end_exponent, count)
        .map(|exp| {
            10usize
                .checked_pow(exp)
                .map_or(MAX_ARRAY_SIZE, |v| v.min(MAX_ARRAY_SIZE))
        })
        .collect()
}

/// Linearly interpolated exponents, truncated toward zero.
fn interpolated_exponents(
    start_exponent: u32,
    end_exponent: u32,
    count: usize,
) -> impl Iterator<Item = u32> {
    let start = f64::from(start_exponent);
    // A single entry has no step; it stays at the start exponent
    let step = if count > 1 {
        (f64::from(end_exponent) - start) / (count - 1) as f64
    } else {
        0.0
    };

    // `as` truncates toward zero and saturates at the bounds
    (0..count).map(move |i| (start + step * i as f64) as u32)
}

/// Narrows a big size to a native size no larger than `limit`.
pub fn clamp_to_size(value: &BigUint, limit: usize) -> usize {
    value.to_usize().map_or(limit, |v| v.min(limit))
}

/// Narrows every entry to at most [`MAX_ARRAY_SIZE`]. Length is preserved.
pub fn narrow_sequence(values: &[BigUint]) -> Vec<usize> {
    values
        .iter()
        .map(|v| clamp_to_size(v, MAX_ARRAY_SIZE))
        .collect()
}
