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

//! Structured error types for the MSTBench CLI.

use mstbench_core::AnalysisError;
use mstbench_csv::TableError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for MSTBench CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use mstbench_cli::error::CliError;
///
/// fn ensure_dir(path: &str) -> Result<(), CliError> {
///     std::fs::create_dir_all(path).map_err(|e| CliError::io_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// I/O operation failed outside the analysis library.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Loading or analysing the benchmark results failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Writing the result table failed.
    #[error("Table export error: {0}")]
    Table(#[from] TableError),

    /// Invalid argument provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
