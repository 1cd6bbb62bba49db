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

//! Property-based tests for the categorize / compare / aggregate stages.
//!
//! - Every vertex count maps to exactly one category, monotonically
//! - Defined speedups are never below 1
//! - Category counts and win counts always add up to the record total

use mstbench_core::{
    aggregate, analyze_records, category, compare, Algorithm, Category, Speedup,
    CATEGORY_BOUNDS,
};
use mstbench_test::RecordBuilder;
use proptest::prelude::*;

fn time() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..10_000.0]
}

fn record_shape() -> impl Strategy<Value = (u64, u64, f64, f64)> {
    (1u64..5_000, 0u64..20_000, time(), time())
}

proptest! {
    #[test]
    fn prop_category_is_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(category(lo) <= category(hi));
    }

    #[test]
    fn prop_category_matches_bounds(v in 0u64..100_000) {
        let expected = CATEGORY_BOUNDS
            .iter()
            .find(|(upper, _)| v < *upper)
            .map(|(_, c)| *c)
            .unwrap_or(Category::Extra);
        prop_assert_eq!(category(v), expected);
    }

    #[test]
    fn prop_speedup_at_least_one(a in 0.001f64..10_000.0, b in 0.001f64..10_000.0) {
        let result = compare(a, b);
        match result.speedup {
            Speedup::Factor(f) => {
                prop_assert!(f >= 1.0);
                prop_assert_eq!(f == 1.0, a == b);
            }
            Speedup::Undefined => prop_assert!(false, "positive times must give a factor"),
        }
    }

    #[test]
    fn prop_winner_is_strictly_faster_or_tie(a in time(), b in time()) {
        let winner = compare(a, b).winner;
        if a < b {
            prop_assert_eq!(winner, Algorithm::A);
        } else {
            prop_assert_eq!(winner, Algorithm::B);
        }
    }

    #[test]
    fn prop_counts_add_up(shapes in prop::collection::vec(record_shape(), 1..60)) {
        let records: Vec<_> = shapes
            .iter()
            .enumerate()
            .map(|(i, &(v, e, ta, tb))| {
                RecordBuilder::new(i as u64 + 1).vertices(v).edges(e).times(ta, tb).build()
            })
            .collect();
        let analyzed = analyze_records(&records);
        let summary = aggregate(&analyzed).unwrap();

        let category_total: usize = summary.categories.iter().map(|c| c.count).sum();
        prop_assert_eq!(category_total, records.len());
        prop_assert_eq!(summary.overall.total, records.len());
        prop_assert_eq!(summary.overall.wins_a + summary.overall.wins_b, records.len());
        for stats in &summary.categories {
            prop_assert!(stats.count > 0);
            prop_assert_eq!(stats.wins_a + stats.wins_b, stats.count);
            prop_assert!(stats.min_vertices <= stats.max_vertices);
        }
    }

    #[test]
    fn prop_mean_speedup_within_range(shapes in prop::collection::vec(record_shape(), 1..40)) {
        let records: Vec<_> = shapes
            .iter()
            .enumerate()
            .map(|(i, &(v, e, ta, tb))| {
                RecordBuilder::new(i as u64 + 1).vertices(v).edges(e).times(ta, tb).build()
            })
            .collect();
        let analyzed = analyze_records(&records);
        let overall = aggregate(&analyzed).unwrap().overall;

        match (overall.mean_speedup_b, overall.max_speedup_b) {
            (Some(mean), Some(max)) => {
                prop_assert!(mean >= 1.0);
                prop_assert!(mean <= max + 1e-9);
            }
            (None, None) => {}
            other => prop_assert!(false, "mean and max disagree: {:?}", other),
        }
    }
}
