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

//! Report command - category and overall statistics.

use super::load;
use crate::error::CliError;
use mstbench_core::reporters::export_summary_json;
use mstbench_core::{render_category_detail, render_report, AlgorithmLabels};
use std::path::Path;

/// Print the statistics report for a result document.
///
/// # Arguments
///
/// * `file` - Benchmark result document
/// * `labels` - Algorithm display names
/// * `detailed` - Also list every graph under its category
/// * `json` - Optional path for the statistics as JSON
///
/// # Errors
///
/// Returns `Err` if loading fails, the document holds no records, or the
/// JSON export cannot be written.
pub fn report(
    file: &str,
    labels: &AlgorithmLabels,
    detailed: bool,
    json: Option<&str>,
) -> Result<(), CliError> {
    let analysis = load(file, labels)?;
    let pipeline = analysis.pipeline();
    let summary = pipeline.summary()?;

    if detailed {
        print!("{}", render_category_detail(pipeline.groups(), labels));
    }
    print!("{}", render_report(&summary, labels));

    if let Some(path) = json {
        export_summary_json(&summary, labels, Path::new(path))?;
    }
    Ok(())
}
