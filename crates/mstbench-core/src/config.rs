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

//! Analysis configuration.
//!
//! Input and output locations are explicit values handed to the pipeline
//! entry point rather than assumptions about the working directory.

use crate::chart::ChartView;
use crate::error::MAX_INPUT_SIZE;
use crate::record::AlgorithmLabels;
use std::path::{Path, PathBuf};

/// Default location of the harness output.
pub const DEFAULT_INPUT: &str = "results/output.json";

/// Default directory for generated artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// File name of the flat comparison table.
pub const TABLE_FILE_NAME: &str = "results.csv";

/// File name of the aggregated statistics export.
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// File name of the chart data export.
pub const CHART_FILE_NAME: &str = "chart_data.json";

/// Configuration for one analysis run.
///
/// # Example
///
/// ```
/// use mstbench_core::{AlgorithmLabels, AnalysisConfig};
///
/// let config = AnalysisConfig::default()
///     .with_input("bench/output.json")
///     .with_output_dir("bench/out")
///     .with_labels(AlgorithmLabels::new("Prim", "Kruskal"));
///
/// assert!(config.table_path().ends_with("results.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Harness output document.
    pub input: PathBuf,
    /// Directory receiving the table, summary and chart artifacts.
    pub output_dir: PathBuf,
    /// Display names for the two algorithms.
    pub labels: AlgorithmLabels,
    /// Largest accepted input document in bytes.
    pub max_input_size: u64,
    /// Chart views to prepare.
    pub chart_views: Vec<ChartView>,
}

impl AnalysisConfig {
    /// Creates a configuration reading `input` and writing into `output_dir`.
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the input document.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the algorithm labels.
    pub fn with_labels(mut self, labels: AlgorithmLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the input size limit.
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.max_input_size = bytes;
        self
    }

    /// Restricts the prepared chart views.
    pub fn with_chart_views(mut self, views: &[ChartView]) -> Self {
        self.chart_views = views.to_vec();
        self
    }

    /// Input document path.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Where the comparison table is written.
    pub fn table_path(&self) -> PathBuf {
        self.output_dir.join(TABLE_FILE_NAME)
    }

    /// Where the statistics export is written.
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }

    /// Where the chart data is written.
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE_NAME)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            labels: AlgorithmLabels::default(),
            max_input_size: MAX_INPUT_SIZE,
            chart_views: ChartView::ALL.to_vec(),
        }
    }
}
