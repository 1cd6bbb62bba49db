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

//! JSON export for statistics and chart data.

use crate::aggregator::{CategoryStatistics, OverallStatistics, Summary};
use crate::chart::ChartData;
use crate::error::{AnalysisError, Result};
use crate::record::AlgorithmLabels;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialized shape of the statistics export.
#[derive(Debug, Serialize)]
pub struct SummaryDocument<'a> {
    /// Algorithm display names.
    pub labels: &'a AlgorithmLabels,
    /// Statistics over all records.
    pub overall: &'a OverallStatistics,
    /// Per-category statistics.
    pub categories: &'a [CategoryStatistics],
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| AnalysisError::Serialization(e.to_string()))
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| AnalysisError::io_error(path, e))?;
    info!(path = %path.display(), "wrote artifact");
    Ok(())
}

/// Serializes the statistics as pretty JSON. Undefined means become `null`.
pub fn to_summary_json(summary: &Summary, labels: &AlgorithmLabels) -> Result<String> {
    to_json(
        &SummaryDocument {
            labels,
            overall: &summary.overall,
            categories: &summary.categories,
        },
        true,
    )
}

/// Writes the statistics export to `path`.
pub fn export_summary_json(summary: &Summary, labels: &AlgorithmLabels, path: &Path) -> Result<()> {
    write(path, &to_summary_json(summary, labels)?)
}

/// Serializes chart data.
pub fn to_chart_json(data: &ChartData, pretty: bool) -> Result<String> {
    to_json(data, pretty)
}

/// Writes chart data to `path` as pretty JSON.
pub fn export_chart_json(data: &ChartData, path: &Path) -> Result<()> {
    write(path, &to_chart_json(data, true)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::chart::ChartView;
    use crate::comparator::analyze_records;
    use crate::pipeline::Analysis;
    use crate::record::{AlgorithmRun, BenchmarkRecord};
    use tempfile::NamedTempFile;

    fn records() -> Vec<BenchmarkRecord> {
        vec![BenchmarkRecord {
            id: 1,
            name: "graph_1".to_string(),
            vertex_count: 10,
            edge_count: 9,
            a: AlgorithmRun::new(5.0, 100, 5.0),
            b: AlgorithmRun::new(5.0, 90, 7.0),
        }]
    }

    #[test]
    fn test_summary_json_null_for_missing_mean() {
        let records = records();
        let summary = aggregate(&analyze_records(&records)).unwrap();
        let json = to_summary_json(&summary, &AlgorithmLabels::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall"]["total"], 1);
        assert!(value["overall"]["mean_speedup_b"].is_null());
        assert_eq!(value["categories"][0]["category"], "small");
        assert_eq!(value["labels"]["b"], "Kruskal");
    }

    #[test]
    fn test_export_summary_json() {
        let records = records();
        let summary = aggregate(&analyze_records(&records)).unwrap();
        let temp = NamedTempFile::new().unwrap();

        export_summary_json(&summary, &AlgorithmLabels::default(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("\"wins_a\": 1"));
    }

    #[test]
    fn test_export_chart_json() {
        let analysis = Analysis::new(records(), AlgorithmLabels::default());
        let data = analysis.pipeline().chart_data(&ChartView::ALL);
        let temp = NamedTempFile::new().unwrap();

        export_chart_json(&data, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("time_vs_vertices"));
        assert!(content.contains("category_time_series"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let records = records();
        let summary = aggregate(&analyze_records(&records)).unwrap();
        let err = export_summary_json(
            &summary,
            &AlgorithmLabels::default(),
            Path::new("/nonexistent/dir/summary.json"),
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
