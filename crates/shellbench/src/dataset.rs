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

//! Random working arrays.

use crate::error::{BenchError, Result};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Produces uniformly distributed integer arrays.
pub struct ArrayGenerator {
    rng: StdRng,
    dist: Uniform<i32>,
}

impl ArrayGenerator {
    /// Creates a generator over `range`, seeded from `seed` or from entropy.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if `range` is empty.
    pub fn new(range: Range<i32>, seed: Option<u64>) -> Result<Self> {
        if range.is_empty() {
            return Err(BenchError::invalid_config(
                "value_range",
                format!("{}..{} contains no values", range.start, range.end),
            ));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            dist: Uniform::from(range),
        })
    }

    /// Generates an array of exactly `size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Allocation`] when the memory cannot be reserved.
    pub fn generate(&mut self, size: usize) -> Result<Vec<i32>> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|e| BenchError::Allocation {
                size,
                message: e.to_string(),
            })?;

        let dist = &self.dist;
        values.extend((&mut self.rng).sample_iter(dist).take(size));
        Ok(values)
    }
}
