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

//! Criterion benchmarks for Shell sort.
//!
//! Random inputs come from a fixed-seed generator so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shellbench_core::shell_sort;

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

const SEED: u64 = 42;

fn random_input(len: usize) -> Vec<i32> {
    let dist = Uniform::from(10_000..100_000);
    StdRng::seed_from_u64(SEED)
        .sample_iter(dist)
        .take(len)
        .collect()
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell_sort_random");

    for &size in SIZES {
        let input = random_input(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| black_box(shell_sort(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell_sort_sorted");

    for &size in SIZES {
        let input: Vec<i32> = (0..size as i32).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| black_box(shell_sort(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_sorted);
criterion_main!(benches);
