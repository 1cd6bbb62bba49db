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

//! Error types for benchmark analysis.
//!
//! Loading is the only stage that can reject data. Everything downstream of
//! the loader is total over well-formed records, except that statistics are
//! refused for an empty record set.

use std::path::PathBuf;
use thiserror::Error;

/// Maximum accepted size of a benchmark result document (100 MB).
///
/// The harness output for the full 35-graph suite is well under 1 MB even
/// with `mst_edges` included, so anything larger is rejected before reading.
pub const MAX_INPUT_SIZE: u64 = 100 * 1024 * 1024;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while loading or analysing benchmark results.
///
/// # Examples
///
/// ```
/// use mstbench_core::AnalysisError;
///
/// let err = AnalysisError::malformed_entry(3, "missing field 'input_stats.vertices'");
/// assert_eq!(
///     err.to_string(),
///     "Malformed input at entry 3: missing field 'input_stats.vertices'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The document or one of its entries is missing required data.
    ///
    /// `entry` is the 0-based position of the offending entry in the
    /// `results` collection, or `None` for document-level problems.
    #[error("Malformed input{}: {message}", entry_suffix(.entry))]
    MalformedInput {
        /// Position of the offending entry, if any.
        entry: Option<usize>,
        /// What was wrong.
        message: String,
    },

    /// Statistics were requested over zero records.
    #[error("No benchmark records to analyse")]
    EmptyInput,

    /// I/O failure while reading input or writing an artifact.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path involved.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// Input document exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The offending file.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured limit in bytes.
        max: u64,
    },

    /// Failed to serialize an analysis artifact.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn entry_suffix(entry: &Option<usize>) -> String {
    match entry {
        Some(i) => format!(" at entry {}", i),
        None => String::new(),
    }
}

impl AnalysisError {
    /// Create a document-level malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            entry: None,
            message: message.into(),
        }
    }

    /// Create a malformed input error attributed to one entry.
    pub fn malformed_entry(entry: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            entry: Some(entry),
            message: message.into(),
        }
    }

    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() || err.is_data() {
            Self::malformed(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}
