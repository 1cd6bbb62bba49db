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

//! Analyze command - every artifact in one run.

use crate::error::CliError;
use colored::Colorize;
use mstbench_core::reporters::{export_chart_json, export_summary_json};
use mstbench_core::{render_report, AlgorithmLabels, Analysis, AnalysisConfig};
use mstbench_csv::{write_table_to_path, TableConfig};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the table, statistics JSON and chart data, then print the report.
///
/// Statistics are computed before anything is written, so an empty input
/// leaves the output directory untouched.
///
/// # Arguments
///
/// * `input` - Result document (defaults to `results/output.json`)
/// * `output_dir` - Artifact directory (defaults to `results`)
/// * `labels` - Algorithm display names
///
/// # Errors
///
/// Returns `Err` if loading fails, the document holds no records, or any
/// artifact cannot be written.
pub fn analyze(
    input: Option<&str>,
    output_dir: Option<&str>,
    labels: &AlgorithmLabels,
) -> Result<(), CliError> {
    let mut config = AnalysisConfig::default().with_labels(labels.clone());
    if let Some(input) = input {
        config = config.with_input(input);
    }
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }

    let analysis = Analysis::load(&config)?;
    let pipeline = analysis.pipeline();
    let summary = pipeline.summary()?;

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| CliError::io_error(&config.output_dir, e))?;

    let table_path = config.table_path();
    write_table_to_path(pipeline.records(), labels, &TableConfig::default(), &table_path)?;
    written(&table_path);

    let summary_path = config.summary_path();
    export_summary_json(&summary, labels, &summary_path)?;
    written(&summary_path);

    let chart_path = config.chart_path();
    export_chart_json(&pipeline.chart_data(&config.chart_views), &chart_path)?;
    written(&chart_path);

    info!(
        records = pipeline.records().len(),
        dir = %config.output_dir.display(),
        "analysis complete"
    );
    print!("{}", render_report(&summary, labels));
    Ok(())
}

fn written(path: &Path) {
    eprintln!("{} {}", "✓".green().bold(), path.display());
}
