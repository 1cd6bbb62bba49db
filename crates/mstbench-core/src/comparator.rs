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

//! Per-record winner and speedup computation.
//!
//! The winner is decided with a strict `<` on execution time: algorithm A
//! wins only when it is strictly faster, so an exact tie goes to B. The
//! speedup is the slower time over the faster time; when the faster time is
//! zero the ratio has no meaning and is reported as [`Speedup::Undefined`]
//! instead of an infinity or NaN.

use crate::category::{category, Category};
use crate::record::{Algorithm, BenchmarkRecord};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Ratio of the slower execution time to the faster one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// A finite ratio, always >= 1.
    Factor(f64),
    /// The faster time was zero, or so close to it that the ratio overflows.
    Undefined,
}

impl Speedup {
    /// Returns the factor, or `None` when undefined.
    pub fn value(&self) -> Option<f64> {
        match self {
            Speedup::Factor(f) => Some(*f),
            Speedup::Undefined => None,
        }
    }

    /// Returns true when the speedup has a numeric value.
    pub fn is_defined(&self) -> bool {
        matches!(self, Speedup::Factor(_))
    }
}

impl fmt::Display for Speedup {
    /// Formats as `2.34x`, or `n/a` when undefined. Precision flags apply
    /// to the factor; two decimals by default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Factor(v) => {
                let precision = f.precision().unwrap_or(2);
                write!(f, "{:.*}x", precision, v)
            }
            Speedup::Undefined => f.write_str("n/a"),
        }
    }
}

impl Serialize for Speedup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Outcome of comparing the two algorithms on one graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// The faster algorithm (B on exact ties).
    pub winner: Algorithm,
    /// Slower time over faster time.
    pub speedup: Speedup,
}

/// Compares two execution times.
///
/// # Examples
///
/// ```
/// use mstbench_core::{compare, Algorithm, Speedup};
///
/// let result = compare(5.0, 7.0);
/// assert_eq!(result.winner, Algorithm::A);
/// assert_eq!(result.speedup, Speedup::Factor(1.4));
///
/// // Ties go to B.
/// assert_eq!(compare(5.0, 5.0).winner, Algorithm::B);
///
/// // A zero faster time has no ratio.
/// assert_eq!(compare(0.0, 3.0).speedup, Speedup::Undefined);
/// ```
pub fn compare(time_a: f64, time_b: f64) -> ComparisonResult {
    let winner = if time_a < time_b {
        Algorithm::A
    } else {
        Algorithm::B
    };

    let (fast, slow) = match winner {
        Algorithm::A => (time_a, time_b),
        Algorithm::B => (time_b, time_a),
    };

    let ratio = slow / fast;
    let speedup = if fast > 0.0 && ratio.is_finite() {
        Speedup::Factor(ratio)
    } else {
        Speedup::Undefined
    };

    ComparisonResult { winner, speedup }
}

/// A record together with everything derived from it alone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalyzedRecord<'a> {
    /// The source record.
    pub record: &'a BenchmarkRecord,
    /// Size category.
    pub category: Category,
    /// Winner and speedup.
    pub comparison: ComparisonResult,
}

impl<'a> AnalyzedRecord<'a> {
    /// Categorizes and compares one record.
    pub fn new(record: &'a BenchmarkRecord) -> Self {
        let (time_a, time_b) = record.times();
        Self {
            record,
            category: category(record.vertex_count),
            comparison: compare(time_a, time_b),
        }
    }

    /// Shorthand for the winner.
    pub fn winner(&self) -> Algorithm {
        self.comparison.winner
    }

    /// Shorthand for the speedup.
    pub fn speedup(&self) -> Speedup {
        self.comparison.speedup
    }
}

/// Categorizes and compares every record, preserving input order.
pub fn analyze_records(records: &[BenchmarkRecord]) -> Vec<AnalyzedRecord<'_>> {
    records
        .iter()
        .map(|record| {
            let analyzed = AnalyzedRecord::new(record);
            if !analyzed.speedup().is_defined() {
                warn!(
                    graph = %record.name,
                    "faster time is zero or too small, speedup undefined"
                );
            }
            analyzed
        })
        .collect()
}
