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

//! Category and overall statistics.
//!
//! Records are partitioned by size category (keeping input order inside each
//! partition) and summarised. Empty categories never appear in the output.
//! Any mean taken over an empty selection is `None`, never zero.
//!
//! The "mean B speedup" is deliberately asymmetric: it averages the speedup
//! only over records algorithm B won, ignoring records A won. Records with an
//! undefined speedup are left out of every speedup mean and maximum.

use crate::category::Category;
use crate::comparator::AnalyzedRecord;
use crate::error::{AnalysisError, Result};
use crate::record::Algorithm;
use serde::Serialize;
use tracing::debug;

/// Records of one non-empty category, in input order.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    /// The category.
    pub category: Category,
    /// Members in input order. Never empty.
    pub members: Vec<AnalyzedRecord<'a>>,
}

/// Statistics for one non-empty category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatistics {
    /// The category.
    pub category: Category,
    /// Number of records.
    pub count: usize,
    /// Smallest vertex count.
    pub min_vertices: u64,
    /// Largest vertex count.
    pub max_vertices: u64,
    /// Smallest edge count.
    pub min_edges: u64,
    /// Largest edge count.
    pub max_edges: u64,
    /// Records where A was strictly faster.
    pub wins_a: usize,
    /// Records where B was faster or tied.
    pub wins_b: usize,
    /// Mean speedup over B-won records; `None` if there are none.
    pub mean_speedup_b: Option<f64>,
    /// Mean execution time of A in milliseconds.
    pub mean_time_a: f64,
    /// Mean execution time of B in milliseconds.
    pub mean_time_b: f64,
}

/// Statistics across every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStatistics {
    /// Number of records.
    pub total: usize,
    /// Records where A was strictly faster.
    pub wins_a: usize,
    /// Records where B was faster or tied.
    pub wins_b: usize,
    /// Share of A wins in percent, unrounded.
    pub win_pct_a: f64,
    /// Share of B wins in percent, unrounded.
    pub win_pct_b: f64,
    /// Mean speedup over B-won records; `None` if there are none.
    pub mean_speedup_b: Option<f64>,
    /// Largest speedup over B-won records; `None` if there are none.
    pub max_speedup_b: Option<f64>,
}

/// Complete aggregation output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Statistics over all records.
    pub overall: OverallStatistics,
    /// Per-category statistics in category order, non-empty categories only.
    pub categories: Vec<CategoryStatistics>,
}

impl Summary {
    /// Looks up the statistics of one category, if it had any members.
    pub fn category(&self, category: Category) -> Option<&CategoryStatistics> {
        self.categories.iter().find(|s| s.category == category)
    }
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Defined speedups of the records algorithm B won.
fn b_speedups(records: &[AnalyzedRecord<'_>]) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.winner() == Algorithm::B)
        .filter_map(|r| r.speedup().value())
        .collect()
}

fn count_wins(records: &[AnalyzedRecord<'_>], algorithm: Algorithm) -> usize {
    records.iter().filter(|r| r.winner() == algorithm).count()
}

/// Partitions records by category.
///
/// Groups come out in category order; members keep their input order.
/// Categories without members are omitted.
pub fn group_by_category<'a>(records: &[AnalyzedRecord<'a>]) -> Vec<CategoryGroup<'a>> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<AnalyzedRecord<'a>> = records
                .iter()
                .filter(|r| r.category == category)
                .copied()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CategoryGroup { category, members })
            }
        })
        .collect()
}

/// Computes statistics for one category group.
pub fn compute_category_statistics(group: &CategoryGroup<'_>) -> CategoryStatistics {
    let members = &group.members;
    let vertices = members.iter().map(|r| r.record.vertex_count);
    let edges = members.iter().map(|r| r.record.edge_count);

    CategoryStatistics {
        category: group.category,
        count: members.len(),
        min_vertices: vertices.clone().min().unwrap_or(0),
        max_vertices: vertices.max().unwrap_or(0),
        min_edges: edges.clone().min().unwrap_or(0),
        max_edges: edges.max().unwrap_or(0),
        wins_a: count_wins(members, Algorithm::A),
        wins_b: count_wins(members, Algorithm::B),
        mean_speedup_b: mean(b_speedups(members)),
        mean_time_a: mean(members.iter().map(|r| r.record.a.execution_time_ms)).unwrap_or(0.0),
        mean_time_b: mean(members.iter().map(|r| r.record.b.execution_time_ms)).unwrap_or(0.0),
    }
}

/// Computes statistics across all records.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when `records` is empty.
pub fn compute_overall_statistics(records: &[AnalyzedRecord<'_>]) -> Result<OverallStatistics> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let total = records.len();
    let wins_a = count_wins(records, Algorithm::A);
    let wins_b = count_wins(records, Algorithm::B);
    let speedups = b_speedups(records);
    let max_speedup_b = speedups
        .iter()
        .copied()
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))));

    Ok(OverallStatistics {
        total,
        wins_a,
        wins_b,
        win_pct_a: wins_a as f64 / total as f64 * 100.0,
        win_pct_b: wins_b as f64 / total as f64 * 100.0,
        mean_speedup_b: mean(speedups),
        max_speedup_b,
    })
}

/// Aggregates analysed records into category and overall statistics.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when `records` is empty.
///
/// # Examples
///
/// ```
/// use mstbench_core::{aggregate, analyze_records, AlgorithmRun, BenchmarkRecord, Category};
///
/// let records = vec![
///     BenchmarkRecord {
///         id: 1,
///         name: "graph_1".into(),
///         vertex_count: 25,
///         edge_count: 40,
///         a: AlgorithmRun::new(10.0, 100, 2.0),
///         b: AlgorithmRun::new(10.0, 80, 1.0),
///     },
///     BenchmarkRecord {
///         id: 2,
///         name: "graph_2".into(),
///         vertex_count: 30,
///         edge_count: 60,
///         a: AlgorithmRun::new(20.0, 300, 1.0),
///         b: AlgorithmRun::new(20.0, 250, 4.0),
///     },
/// ];
///
/// let summary = aggregate(&analyze_records(&records)).unwrap();
/// assert_eq!(summary.categories.len(), 2);
/// assert_eq!(summary.category(Category::Small).unwrap().count, 1);
/// assert_eq!(summary.category(Category::Medium).unwrap().count, 1);
/// ```
pub fn aggregate(records: &[AnalyzedRecord<'_>]) -> Result<Summary> {
    let overall = compute_overall_statistics(records)?;
    let categories: Vec<CategoryStatistics> = group_by_category(records)
        .iter()
        .map(compute_category_statistics)
        .collect();

    debug!(
        total = overall.total,
        categories = categories.len(),
        "aggregated benchmark records"
    );

    Ok(Summary {
        overall,
        categories,
    })
}
