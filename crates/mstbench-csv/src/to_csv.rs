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

//! Write analysed records as CSV.

use crate::error::{Result, TableError};
use mstbench_core::{Algorithm, AlgorithmLabels, AnalyzedRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Configuration for table output.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub has_headers: bool,
    /// Decimal places for execution times (default: 2)
    pub time_precision: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            time_precision: 2,
        }
    }
}

/// Column names, with operation/time prefixes taken from the label initials.
pub fn table_header(labels: &AlgorithmLabels) -> Vec<String> {
    let a = labels.prefix(Algorithm::A);
    let b = labels.prefix(Algorithm::B);
    vec![
        "Graph".to_string(),
        "Category".to_string(),
        "V".to_string(),
        "E".to_string(),
        "Cost".to_string(),
        format!("{}_Ops", a),
        format!("{}_Time", a),
        format!("{}_Ops", b),
        format!("{}_Time", b),
        "Winner".to_string(),
        "Speedup".to_string(),
    ]
}

/// Formats one record as table cells.
///
/// The cost column is empty when the record carries no cost.
pub fn table_row(
    record: &AnalyzedRecord<'_>,
    labels: &AlgorithmLabels,
    config: &TableConfig,
) -> Vec<String> {
    let r = record.record;
    let precision = config.time_precision;
    vec![
        r.name.clone(),
        record.category.as_str().to_string(),
        r.vertex_count.to_string(),
        r.edge_count.to_string(),
        r.cost().map(|c| c.to_string()).unwrap_or_default(),
        r.a.operations_count.to_string(),
        format!("{:.*}", precision, r.a.execution_time_ms),
        r.b.operations_count.to_string(),
        format!("{:.*}", precision, r.b.execution_time_ms),
        labels.get(record.winner()).to_string(),
        record.speedup().to_string(),
    ]
}

/// Writes the table to any writer.
///
/// Produces the header (if enabled) followed by exactly one row per record.
pub fn write_table<W: Write>(
    records: &[AnalyzedRecord<'_>],
    labels: &AlgorithmLabels,
    config: &TableConfig,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_writer(writer);

    if config.has_headers {
        wtr.write_record(table_header(labels))?;
    }
    for record in records {
        wtr.write_record(table_row(record, labels, config))?;
    }

    wtr.flush()?;
    debug!(rows = records.len(), "wrote result table");
    Ok(())
}

/// Renders the table with the default configuration.
pub fn to_csv_string(records: &[AnalyzedRecord<'_>], labels: &AlgorithmLabels) -> Result<String> {
    to_csv_string_with_config(records, labels, &TableConfig::default())
}

/// Renders the table with a custom configuration.
pub fn to_csv_string_with_config(
    records: &[AnalyzedRecord<'_>],
    labels: &AlgorithmLabels,
    config: &TableConfig,
) -> Result<String> {
    let mut buffer = Vec::with_capacity(64 * (records.len() + 1));
    write_table(records, labels, config, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TableError::Csv(e.to_string()))
}

/// Writes the table to a file, replacing any existing file.
pub fn write_table_to_path(
    records: &[AnalyzedRecord<'_>],
    labels: &AlgorithmLabels,
    config: &TableConfig,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| TableError::Io(format!("{}: {}", path.display(), e)))?;
    write_table(records, labels, config, BufWriter::new(file))?;
    info!(path = %path.display(), rows = records.len(), "exported result table");
    Ok(())
}
