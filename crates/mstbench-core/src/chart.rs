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

//! Chart-ready data series.
//!
//! Shapes analysed records into the numeric series, labels and annotations
//! an external renderer needs. Nothing here draws; every view is plain data
//! that serializes to JSON. Categories without members are simply absent.

use crate::aggregator::{CategoryGroup, CategoryStatistics};
use crate::category::Category;
use crate::comparator::AnalyzedRecord;
use crate::pipeline::Pipeline;
use crate::record::{Algorithm, AlgorithmLabels};
use serde::Serialize;

/// The views a renderer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    /// Execution time against vertex count, one series pair per category.
    TimeVsVertices,
    /// Execution time against edge count.
    TimeVsEdges,
    /// Operation count against vertex count.
    OperationsVsVertices,
    /// Mean B speedup per category.
    SpeedupByCategory,
    /// B win count per category.
    WinsByCategory,
    /// Operation counts per graph, ordered by category, with separators.
    OperationsByGraph,
    /// Per-category execution time series with a max-speedup annotation.
    CategoryTimeSeries,
}

impl ChartView {
    /// Every view, in presentation order.
    pub const ALL: [ChartView; 7] = [
        ChartView::TimeVsVertices,
        ChartView::TimeVsEdges,
        ChartView::OperationsVsVertices,
        ChartView::SpeedupByCategory,
        ChartView::WinsByCategory,
        ChartView::OperationsByGraph,
        ChartView::CategoryTimeSeries,
    ];

    /// Returns the view name as used in exported JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartView::TimeVsVertices => "time_vs_vertices",
            ChartView::TimeVsEdges => "time_vs_edges",
            ChartView::OperationsVsVertices => "operations_vs_vertices",
            ChartView::SpeedupByCategory => "speedup_by_category",
            ChartView::WinsByCategory => "wins_by_category",
            ChartView::OperationsByGraph => "operations_by_graph",
            ChartView::CategoryTimeSeries => "category_time_series",
        }
    }

    /// Parses a view name.
    pub fn parse(name: &str) -> Option<ChartView> {
        ChartView::ALL.iter().copied().find(|v| v.as_str() == name)
    }
}

/// One named series of (x, y) points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XySeries {
    /// Legend label.
    pub label: String,
    /// Which algorithm the values belong to.
    pub algorithm: Algorithm,
    /// Category the series is restricted to, if any.
    pub category: Option<Category>,
    /// X values.
    pub x: Vec<f64>,
    /// Y values, same length as `x`.
    pub y: Vec<f64>,
}

/// Scatter plot data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Series to plot.
    pub series: Vec<XySeries>,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category the bar stands for.
    pub category: Category,
    /// Tick label.
    pub label: String,
    /// Bar height.
    pub value: f64,
    /// Text to print on top of the bar.
    pub annotation: String,
}

/// Bar chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    /// Chart title.
    pub title: String,
    /// Y axis label.
    pub y_label: String,
    /// Bars in category order.
    pub bars: Vec<Bar>,
}

/// Start of a category in an ordered-by-category view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeparator {
    /// Index of the first graph of the category.
    pub index: usize,
    /// The category starting there.
    pub category: Category,
    /// Text for the separator.
    pub label: String,
}

/// Per-graph grouped bars, ordered by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedComparison {
    /// Chart title.
    pub title: String,
    /// Y axis label.
    pub y_label: String,
    /// Graph names, one per index.
    pub names: Vec<String>,
    /// Values for algorithm A.
    pub values_a: Vec<f64>,
    /// Values for algorithm B.
    pub values_b: Vec<f64>,
    /// Separators between categories. The first category gets none.
    pub separators: Vec<CategorySeparator>,
}

/// Point annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// X position (index within the panel).
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Annotation text.
    pub text: String,
}

/// Execution time series for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPanel {
    /// The category.
    pub category: Category,
    /// Panel title, e.g. `SMALL: V=10-25`.
    pub title: String,
    /// Graph names, one per index.
    pub names: Vec<String>,
    /// Times of algorithm A.
    pub time_a: Vec<f64>,
    /// Times of algorithm B.
    pub time_b: Vec<f64>,
    /// Largest defined speedup in the category, anchored on B's time.
    pub max_speedup: Option<Annotation>,
}

/// All category panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPanels {
    /// One panel per non-empty category.
    pub panels: Vec<CategoryPanel>,
}

/// Data for one prepared view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewData {
    /// Scatter plot.
    Scatter(ScatterView),
    /// Bar chart.
    Bars(BarView),
    /// Grouped per-graph bars.
    Indexed(IndexedComparison),
    /// Per-category panels.
    Panels(CategoryPanels),
}

/// A view together with its data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedView {
    /// Which view this is.
    pub view: ChartView,
    /// The data.
    #[serde(flatten)]
    pub data: ViewData,
}

/// Everything handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Algorithm display names.
    pub labels: AlgorithmLabels,
    /// Prepared views, in request order.
    pub views: Vec<PreparedView>,
}

impl ChartData {
    /// Returns the prepared data for one view, if it was requested.
    pub fn get(&self, view: ChartView) -> Option<&ViewData> {
        self.views.iter().find(|v| v.view == view).map(|v| &v.data)
    }
}

/// Prepares the requested views from an already-run pipeline.
///
/// Groups and category statistics are read from the pipeline, never
/// recomputed here.
pub fn prepare_chart_data(pipeline: &Pipeline<'_>, views: &[ChartView]) -> ChartData {
    ChartData {
        labels: pipeline.labels().clone(),
        views: views
            .iter()
            .map(|&view| PreparedView {
                view,
                data: prepare_view(view, pipeline),
            })
            .collect(),
    }
}

/// Prepares a single view.
pub fn prepare_view(view: ChartView, pipeline: &Pipeline<'_>) -> ViewData {
    let records = pipeline.records();
    let groups = pipeline.groups();
    let stats = pipeline.categories();
    let labels = pipeline.labels();
    match view {
        ChartView::TimeVsVertices => ViewData::Scatter(time_vs_vertices(groups, labels)),
        ChartView::TimeVsEdges => ViewData::Scatter(ScatterView {
            title: "Time vs Edges".to_string(),
            x_label: "Number of Edges (E)".to_string(),
            y_label: "Execution Time (ms)".to_string(),
            series: paired_series(records, labels, None, |r| r.record.edge_count as f64, time),
        }),
        ChartView::OperationsVsVertices => ViewData::Scatter(ScatterView {
            title: format!("Operations: {} vs {}", labels.a, labels.b),
            x_label: "Number of Vertices (V)".to_string(),
            y_label: "Operations Count".to_string(),
            series: paired_series(
                records,
                labels,
                None,
                |r| r.record.vertex_count as f64,
                operations,
            ),
        }),
        ChartView::SpeedupByCategory => ViewData::Bars(speedup_by_category(stats, labels)),
        ChartView::WinsByCategory => ViewData::Bars(wins_by_category(stats, labels)),
        ChartView::OperationsByGraph => ViewData::Indexed(operations_by_graph(groups, labels)),
        ChartView::CategoryTimeSeries => ViewData::Panels(category_panels(groups, stats)),
    }
}

fn time(r: &AnalyzedRecord<'_>, algorithm: Algorithm) -> f64 {
    r.record.run(algorithm).execution_time_ms
}

fn operations(r: &AnalyzedRecord<'_>, algorithm: Algorithm) -> f64 {
    r.record.run(algorithm).operations_count as f64
}

fn paired_series<X, Y>(
    records: &[AnalyzedRecord<'_>],
    labels: &AlgorithmLabels,
    category: Option<Category>,
    x: X,
    y: Y,
) -> Vec<XySeries>
where
    X: Fn(&AnalyzedRecord<'_>) -> f64,
    Y: Fn(&AnalyzedRecord<'_>, Algorithm) -> f64,
{
    Algorithm::ALL
        .iter()
        .map(|&algorithm| XySeries {
            label: match category {
                Some(cat) => format!("{} ({})", labels.get(algorithm), cat),
                None => labels.get(algorithm).to_string(),
            },
            algorithm,
            category,
            x: records.iter().map(&x).collect(),
            y: records.iter().map(|r| y(r, algorithm)).collect(),
        })
        .collect()
}

fn time_vs_vertices(groups: &[CategoryGroup<'_>], labels: &AlgorithmLabels) -> ScatterView {
    ScatterView {
        title: format!("Execution Time: {} vs {}", labels.a, labels.b),
        x_label: "Number of Vertices (V)".to_string(),
        y_label: "Execution Time (ms)".to_string(),
        series: groups
            .iter()
            .flat_map(|g| {
                paired_series(
                    &g.members,
                    labels,
                    Some(g.category),
                    |r| r.record.vertex_count as f64,
                    time,
                )
            })
            .collect(),
    }
}

fn speedup_by_category(stats: &[CategoryStatistics], labels: &AlgorithmLabels) -> BarView {
    BarView {
        title: format!("Average {} Speedup", labels.b),
        y_label: "Average Speedup (x times)".to_string(),
        bars: stats
            .iter()
            .filter_map(|s| {
                s.mean_speedup_b.map(|value| Bar {
                    category: s.category,
                    label: s.category.title().to_string(),
                    value,
                    annotation: format!("{:.1}x", value),
                })
            })
            .collect(),
    }
}

fn wins_by_category(stats: &[CategoryStatistics], labels: &AlgorithmLabels) -> BarView {
    BarView {
        title: format!("{} Wins by Category", labels.b),
        y_label: format!("{} Wins Count", labels.b),
        bars: stats
            .iter()
            .map(|s| Bar {
                category: s.category,
                label: format!("{}\n({} graphs)", s.category.title(), s.count),
                value: s.wins_b as f64,
                annotation: s.wins_b.to_string(),
            })
            .collect(),
    }
}

fn operations_by_graph(
    groups: &[CategoryGroup<'_>],
    labels: &AlgorithmLabels,
) -> IndexedComparison {
    let mut chart = IndexedComparison {
        title: format!("Operations Comparison for All Graphs ({} vs {})", labels.a, labels.b),
        y_label: "Operations Count".to_string(),
        names: Vec::new(),
        values_a: Vec::new(),
        values_b: Vec::new(),
        separators: Vec::new(),
    };

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            chart.separators.push(CategorySeparator {
                index: chart.names.len(),
                category: group.category,
                label: group.category.as_str().to_uppercase(),
            });
        }
        for r in &group.members {
            chart.names.push(r.record.name.clone());
            chart.values_a.push(operations(r, Algorithm::A));
            chart.values_b.push(operations(r, Algorithm::B));
        }
    }

    chart
}

fn category_panels(groups: &[CategoryGroup<'_>], stats: &[CategoryStatistics]) -> CategoryPanels {
    CategoryPanels {
        panels: groups
            .iter()
            .zip(stats)
            .map(|(group, stats)| category_panel(group, stats))
            .collect(),
    }
}

fn category_panel(group: &CategoryGroup<'_>, stats: &CategoryStatistics) -> CategoryPanel {
    // Largest defined speedup regardless of winner; first one wins ties.
    let max_speedup = group
        .members
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.speedup().value().map(|s| (i, s)))
        .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((i, s)),
        })
        .map(|(i, s)| Annotation {
            x: i as f64,
            y: group.members[i].record.b.execution_time_ms,
            text: format!("Max speedup:\n{:.1}x", s),
        });

    CategoryPanel {
        category: group.category,
        title: format!(
            "{}: V={}-{}",
            group.category.as_str().to_uppercase(),
            stats.min_vertices,
            stats.max_vertices
        ),
        names: group.members.iter().map(|r| r.record.name.clone()).collect(),
        time_a: group.members.iter().map(|r| time(r, Algorithm::A)).collect(),
        time_b: group.members.iter().map(|r| time(r, Algorithm::B)).collect(),
        max_speedup,
    }
}
