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

//! Measurement primitives.
//!
//! Single-shot wall-clock timing on the monotonic clock.

use std::time::{Duration, Instant};

/// A timing measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    /// Total duration of the measured operation.
    pub duration: Duration,
}

impl Measurement {
    /// Creates a new measurement.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Returns the duration in fractional milliseconds.
    pub fn as_millis_f64(&self) -> f64 {
        self.duration.as_secs_f64() * 1_000.0
    }
}

/// Runs `f` once and measures how long it took.
///
/// # Example
///
/// ```
/// use shellbench::core::measurement::measure;
///
/// let (sum, m) = measure(|| (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(m.as_millis_f64() >= 0.0);
/// ```
pub fn measure<T, F>(f: F) -> (T, Measurement)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, Measurement::new(start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_millis_f64() {
        let m = Measurement::new(Duration::from_micros(1_500));
        assert!((m.as_millis_f64() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_measure_returns_value() {
        let (value, m) = measure(|| {
            std::thread::sleep(Duration::from_millis(2));
            "done"
        });
        assert_eq!(value, "done");
        assert!(m.duration >= Duration::from_millis(2));
    }
}
