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

//! Chart command - data series for an external renderer.

use super::{load, write_output};
use crate::error::CliError;
use mstbench_core::reporters::to_chart_json;
use mstbench_core::{AlgorithmLabels, ChartView};

/// Resolve view names, defaulting to every view when none are given.
///
/// # Errors
///
/// Returns `Err` naming the first unknown view and listing the valid ones.
pub fn parse_views(names: &[String]) -> Result<Vec<ChartView>, CliError> {
    if names.is_empty() {
        return Ok(ChartView::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            ChartView::parse(name).ok_or_else(|| {
                let valid: Vec<&str> = ChartView::ALL.iter().map(|v| v.as_str()).collect();
                CliError::invalid_input(format!(
                    "unknown chart view '{}' (expected one of: {})",
                    name,
                    valid.join(", ")
                ))
            })
        })
        .collect()
}

/// Export chart data as JSON.
///
/// # Errors
///
/// Returns `Err` if loading fails, a view name is unknown, or writing fails.
pub fn chart(
    file: &str,
    labels: &AlgorithmLabels,
    output: Option<&str>,
    pretty: bool,
    views: &[String],
) -> Result<(), CliError> {
    let views = parse_views(views)?;
    let analysis = load(file, labels)?;
    let data = analysis.pipeline().chart_data(&views);

    let mut json = to_chart_json(&data, pretty)?;
    json.push('\n');
    write_output(&json, output)
}
