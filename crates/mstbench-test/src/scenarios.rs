// Dweve MSTBench - MST Benchmark Analysis
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

//! Small hand-written record sets with known outcomes.

use crate::RecordBuilder;
use mstbench_core::BenchmarkRecord;

/// One small graph where A is 1.4x faster.
pub fn a_wins_small() -> Vec<BenchmarkRecord> {
    vec![RecordBuilder::new(1).vertices(10).edges(9).times(5.0, 7.0).build()]
}

/// Identical times on both algorithms.
pub fn tie() -> Vec<BenchmarkRecord> {
    vec![RecordBuilder::new(2).vertices(10).edges(9).times(5.0, 5.0).build()]
}

/// Two graphs straddling the small/medium boundary.
pub fn small_medium_boundary() -> Vec<BenchmarkRecord> {
    vec![
        RecordBuilder::new(1).vertices(25).edges(40).times(1.0, 2.0).build(),
        RecordBuilder::new(2).vertices(30).edges(50).times(2.0, 1.0).build(),
    ]
}

/// A zero-time A run, which leaves the speedup undefined.
pub fn zero_time() -> Vec<BenchmarkRecord> {
    vec![RecordBuilder::new(1).vertices(10).edges(9).times(0.0, 3.0).build()]
}

/// One graph in every category, B winning everywhere except the small one.
pub fn every_category() -> Vec<BenchmarkRecord> {
    vec![
        RecordBuilder::new(1).name("tiny").vertices(12).edges(20).times(1.0, 2.0).build(),
        RecordBuilder::new(2).name("mid").vertices(150).edges(450).times(4.0, 2.0).build(),
        RecordBuilder::new(3).name("big").vertices(600).edges(2400).times(9.0, 3.0).build(),
        RecordBuilder::new(4).name("huge").vertices(1500).edges(6000).times(20.0, 5.0).build(),
    ]
}
