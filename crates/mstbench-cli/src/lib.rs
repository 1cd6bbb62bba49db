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

//! MSTBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: Category and overall statistics as text, optionally as JSON
//! - **table**: One CSV row per graph
//! - **chart**: Chart data series as JSON for an external renderer
//! - **analyze**: All of the above into an output directory
//!
//! # Examples
//!
//! ```no_run
//! use mstbench_cli::commands::report;
//! use mstbench_core::AlgorithmLabels;
//!
//! # fn main() -> Result<(), mstbench_cli::error::CliError> {
//! report("results/output.json", &AlgorithmLabels::default(), false, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
