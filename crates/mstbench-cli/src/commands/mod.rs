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

//! CLI command implementations

mod analyze;
mod chart;
mod report;
mod table;

pub use analyze::analyze;
pub use chart::{chart, parse_views};
pub use report::report;
pub use table::{parse_delimiter, table};

use crate::error::CliError;
use mstbench_core::{AlgorithmLabels, Analysis, AnalysisConfig};
use std::fs;
use std::io::{self, Write};

/// Load a benchmark result document with the default size limit.
///
/// # Errors
///
/// Returns `Err` if the file is missing, too large or malformed.
pub fn load(file: &str, labels: &AlgorithmLabels) -> Result<Analysis, CliError> {
    let config = AnalysisConfig::default()
        .with_input(file)
        .with_labels(labels.clone());
    Ok(Analysis::load(&config)?)
}

/// Write output to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if writing fails.
pub fn write_output(content: &str, output: Option<&str>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::io_error(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
