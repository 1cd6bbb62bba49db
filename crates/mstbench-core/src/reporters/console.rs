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

//! Console reporter for analysis results.
//!
//! Rendering only rounds for display; the statistics themselves are never
//! touched. Means with no data print as `n/a`.

use crate::aggregator::{CategoryGroup, CategoryStatistics, OverallStatistics, Summary};
use crate::comparator::AnalyzedRecord;
use crate::record::{Algorithm, AlgorithmLabels};
use std::fmt;

const WIDE: usize = 80;

fn optional_speedup(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}x", v))
        .unwrap_or_else(|| "n/a".to_string())
}

/// Summary report: category statistics followed by overall statistics.
pub struct ConsoleReport<'a> {
    summary: &'a Summary,
    labels: &'a AlgorithmLabels,
}

impl<'a> ConsoleReport<'a> {
    /// Creates a report over a summary.
    pub fn new(summary: &'a Summary, labels: &'a AlgorithmLabels) -> Self {
        Self { summary, labels }
    }

    fn write_category(
        &self,
        f: &mut fmt::Formatter<'_>,
        stats: &CategoryStatistics,
    ) -> fmt::Result {
        let (a, b) = (&self.labels.a, &self.labels.b);
        writeln!(
            f,
            "\n{} ({} graphs):",
            stats.category.as_str().to_uppercase(),
            stats.count
        )?;
        writeln!(f, "  Vertices: {}-{}", stats.min_vertices, stats.max_vertices)?;
        writeln!(f, "  Edges: {}-{}", stats.min_edges, stats.max_edges)?;
        writeln!(f, "  {} wins: {}", a, stats.wins_a)?;
        writeln!(f, "  {} wins: {}", b, stats.wins_b)?;
        writeln!(
            f,
            "  Avg {} speedup: {}",
            b,
            optional_speedup(stats.mean_speedup_b)
        )?;
        writeln!(f, "  Avg {} time: {:.2} ms", a, stats.mean_time_a)?;
        writeln!(f, "  Avg {} time: {:.2} ms", b, stats.mean_time_b)
    }

    fn write_overall(
        &self,
        f: &mut fmt::Formatter<'_>,
        overall: &OverallStatistics,
    ) -> fmt::Result {
        let (a, b) = (&self.labels.a, &self.labels.b);
        writeln!(f, "Total graphs: {}", overall.total)?;
        writeln!(
            f,
            "{} faster: {} ({:.1}%)",
            a, overall.wins_a, overall.win_pct_a
        )?;
        writeln!(
            f,
            "{} faster: {} ({:.1}%)",
            b, overall.wins_b, overall.win_pct_b
        )?;
        writeln!(
            f,
            "Average {} speedup: {}",
            b,
            optional_speedup(overall.mean_speedup_b)
        )?;
        writeln!(
            f,
            "Maximum {} speedup: {}",
            b,
            optional_speedup(overall.max_speedup_b)
        )
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(WIDE))?;
        writeln!(f, "MST ALGORITHMS PERFORMANCE ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(WIDE))?;
        writeln!(f)?;
        writeln!(f, "STATISTICS BY CATEGORY:")?;
        writeln!(f, "{}", "-".repeat(WIDE))?;

        for stats in &self.summary.categories {
            self.write_category(f, stats)?;
        }

        writeln!(f, "\n{}", "=".repeat(WIDE))?;
        writeln!(f, "OVERALL STATISTICS:")?;
        writeln!(f, "{}", "-".repeat(WIDE))?;
        self.write_overall(f, &self.summary.overall)
    }
}

/// Renders the summary report to a string.
pub fn render_report(summary: &Summary, labels: &AlgorithmLabels) -> String {
    ConsoleReport::new(summary, labels).to_string()
}

/// Per-graph listing grouped by category, with a winner marker per line.
pub struct CategoryDetail<'a, 'r> {
    groups: &'a [CategoryGroup<'r>],
    labels: &'a AlgorithmLabels,
}

impl<'a, 'r> CategoryDetail<'a, 'r> {
    /// Creates a detail listing over category groups.
    pub fn new(groups: &'a [CategoryGroup<'r>], labels: &'a AlgorithmLabels) -> Self {
        Self { groups, labels }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, r: &AnalyzedRecord<'_>) -> fmt::Result {
        let rec = r.record;
        writeln!(
            f,
            "{:<15} {:>8} {:>8} | {:>12} {:>10.2}ms | {:>12} {:>10.2}ms <- {}",
            rec.name,
            rec.vertex_count,
            rec.edge_count,
            rec.a.operations_count,
            rec.a.execution_time_ms,
            rec.b.operations_count,
            rec.b.execution_time_ms,
            self.labels.get(r.winner())
        )
    }
}

impl fmt::Display for CategoryDetail<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.labels.a, &self.labels.b);
        writeln!(f, "{}", "=".repeat(WIDE))?;
        writeln!(f, "PERFORMANCE DETAIL")?;
        writeln!(f, "{}", "=".repeat(WIDE))?;

        for group in self.groups {
            writeln!(f, "\n{} Graphs:", group.category.title())?;
            writeln!(f, "{}", "-".repeat(WIDE))?;
            writeln!(
                f,
                "{:<15} {:>8} {:>8} | {:>12} {:>12} | {:>12} {:>12}",
                "Name",
                "Vertices",
                "Edges",
                format!("{} Ops", a),
                format!("{} Time", a),
                format!("{} Ops", b),
                format!("{} Time", b)
            )?;
            writeln!(f, "{}", "-".repeat(WIDE))?;

            let mut total_a = 0.0;
            let mut total_b = 0.0;
            let mut wins = [0usize; 2];
            for r in &group.members {
                self.write_row(f, r)?;
                total_a += r.record.a.execution_time_ms;
                total_b += r.record.b.execution_time_ms;
                match r.winner() {
                    Algorithm::A => wins[0] += 1,
                    Algorithm::B => wins[1] += 1,
                }
            }

            let n = group.members.len() as f64;
            writeln!(f, "{}", "-".repeat(WIDE))?;
            writeln!(
                f,
                "Average time: {} = {:.2}ms, {} = {:.2}ms",
                a,
                total_a / n,
                b,
                total_b / n
            )?;
            writeln!(f, "Faster: {} = {} times, {} = {} times", a, wins[0], b, wins[1])?;
        }

        writeln!(f, "\n{}", "=".repeat(WIDE))
    }
}

/// Renders the per-graph category listing to a string.
pub fn render_category_detail(groups: &[CategoryGroup<'_>], labels: &AlgorithmLabels) -> String {
    CategoryDetail::new(groups, labels).to_string()
}
