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

//! Table command - one CSV row per graph.

use super::load;
use crate::error::CliError;
use mstbench_core::AlgorithmLabels;
use mstbench_csv::{write_table, write_table_to_path, TableConfig};
use std::io;
use std::path::Path;

/// Parse a delimiter argument into a single byte.
///
/// Accepts one ASCII character, or `tab` / `\t` for a tab.
///
/// # Errors
///
/// Returns `Err` for empty, multi-character or non-ASCII input.
pub fn parse_delimiter(value: &str) -> Result<u8, CliError> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() && c != '"' => Ok(c as u8),
                _ => Err(CliError::invalid_input(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    value
                ))),
            }
        }
    }
}

/// Export the per-graph table.
///
/// An input with zero records still produces the header row.
///
/// # Errors
///
/// Returns `Err` if loading fails, the delimiter is invalid, or writing fails.
pub fn table(
    file: &str,
    labels: &AlgorithmLabels,
    output: Option<&str>,
    delimiter: &str,
) -> Result<(), CliError> {
    let config = TableConfig {
        delimiter: parse_delimiter(delimiter)?,
        ..TableConfig::default()
    };
    let analysis = load(file, labels)?;
    let pipeline = analysis.pipeline();

    match output {
        Some(path) => write_table_to_path(pipeline.records(), labels, &config, Path::new(path))?,
        None => write_table(pipeline.records(), labels, &config, io::stdout().lock())?,
    }
    Ok(())
}
