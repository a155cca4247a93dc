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

//! Shell sort with operation counting.
//!
//! Uses the halving gap sequence (`len / 2`, `len / 4`, ..., `1`). Each gapped
//! insertion counts one iteration per element shifted and one per final
//! placement of the held value.

/// Operation counts from a single [`shell_sort`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Length of the sorted slice.
    pub length: usize,
    /// Elements moved right by one gap.
    pub shifts: u64,
    /// Held values written into their final slot for a gap.
    pub placements: u64,
}

impl SortStats {
    /// Total iteration count: shifts plus placements.
    pub fn iterations(&self) -> u64 {
        self.shifts + self.placements
    }
}

/// Sorts `arr` ascending in place and returns the operations performed.
///
/// Comparison is strict greater-than, so equal elements are never shifted
/// past each other within one gapped pass. The sort is not stable across
/// passes.
///
/// # Example
///
/// ```
/// use shellbench_core::shell_sort;
///
/// let mut nums = vec![64, 34, 25, 12, 22, 11, 90];
/// let stats = shell_sort(&mut nums);
/// assert_eq!(nums, vec![11, 12, 22, 25, 34, 64, 90]);
/// assert_eq!(stats.length, 7);
/// ```
pub fn shell_sort<T: Copy + PartialOrd>(arr: &mut [T]) -> SortStats {
    let mut stats = SortStats {
        length: arr.len(),
        ..SortStats::default()
    };

    let mut gap = arr.len() / 2;
    while gap > 0 {
        for i in gap..arr.len() {
            let held = arr[i];
            let mut j = i;
            while j >= gap && arr[j - gap] > held {
                arr[j] = arr[j - gap];
                j -= gap;
                stats.shifts += 1;
            }
            arr[j] = held;
            stats.placements += 1;
        }
        gap /= 2;
    }

    stats
}

/// Returns `true` if every element is less than or equal to its successor.
pub fn is_sorted_ascending<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_traced_five_elements() {
        // gap 2:
        //   i=2 [5,3,4,1,2] -> 1 shift  -> [4,3,5,1,2]
        //   i=3             -> 1 shift  -> [4,1,5,3,2]
        //   i=4             -> 2 shifts -> [2,1,4,3,5]
        // gap 1:
        //   i=1 -> 1 shift, i=2 -> 0, i=3 -> 1 shift, i=4 -> 0
        let mut arr = [5, 3, 4, 1, 2];
        let stats = shell_sort(&mut arr);

        assert_eq!(arr, [1, 2, 3, 4, 5]);
        assert_eq!(stats.shifts, 6);
        assert_eq!(stats.placements, 7);
        assert_eq!(stats.iterations(), 13);
        assert_eq!(stats.length, 5);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert_eq!(shell_sort(&mut empty), SortStats::default());

        let mut single = [42];
        let stats = shell_sort(&mut single);
        assert_eq!(single, [42]);
        assert_eq!(stats.iterations(), 0);
        assert_eq!(stats.length, 1);
    }

    #[test]
    fn test_already_sorted_has_no_shifts() {
        let mut arr: Vec<i32> = (0..100).collect();
        let stats = shell_sort(&mut arr);

        // gaps 50, 25, 12, 6, 3, 1
        let expected: u64 = [50u64, 25, 12, 6, 3, 1].iter().map(|g| 100 - g).sum();
        assert_eq!(stats.shifts, 0);
        assert_eq!(stats.placements, expected);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut arr: Vec<i32> = (0..64).rev().collect();
        let stats = shell_sort(&mut arr);
        assert!(is_sorted_ascending(&arr));
        assert!(stats.shifts > 0);
    }

    #[test]
    fn test_duplicates() {
        let mut arr = [3, 1, 3, 1, 2, 2, 3];
        shell_sort(&mut arr);
        assert_eq!(arr, [1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_floats() {
        let mut arr = [2.5, -1.0, 0.0, 10.25];
        shell_sort(&mut arr);
        assert_eq!(arr, [-1.0, 0.0, 2.5, 10.25]);
    }

    #[test]
    fn test_is_sorted_ascending() {
        assert!(is_sorted_ascending::<i32>(&[]));
        assert!(is_sorted_ascending(&[1]));
        assert!(is_sorted_ascending(&[1, 1, 2]));
        assert!(!is_sorted_ascending(&[2, 1]));
    }
}
