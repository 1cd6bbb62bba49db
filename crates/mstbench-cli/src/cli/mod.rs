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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use mstbench_core::AlgorithmLabels;

/// Top-level CLI commands.
///
/// Every command loads one benchmark result document, runs the shared
/// analysis pipeline once and hands the result to one or more sinks.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use mstbench_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Print category and overall statistics
    ///
    /// Groups graphs into small, medium, large and extra by vertex count and
    /// reports win counts, speedups and mean times per group and overall.
    Report {
        /// Benchmark result document
        #[arg(value_name = "FILE")]
        file: String,

        /// Also list every graph under its category
        #[arg(short, long)]
        detailed: bool,

        /// Write the statistics as JSON to this path
        #[arg(long, value_name = "PATH")]
        json: Option<String>,
    },

    /// Export one CSV row per graph
    Table {
        /// Benchmark result document
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Field delimiter (a single character, or "tab")
        #[arg(short, long, default_value = ",")]
        delimiter: String,
    },

    /// Export chart data series as JSON
    ///
    /// Produces the numeric series, category groupings and annotations an
    /// external renderer needs. Nothing is drawn.
    Chart {
        /// Benchmark result document
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Views to prepare (repeatable; defaults to all)
        #[arg(long = "view", value_name = "NAME")]
        views: Vec<String>,
    },

    /// Write table, statistics and chart data into a directory
    ///
    /// Reads `results/output.json` and writes into `results/` unless told
    /// otherwise, then prints the report.
    Analyze {
        /// Benchmark result document
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,

        /// Directory for the generated artifacts (created if missing)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<String>,
    },
}

impl Commands {
    /// Execute the command with the given algorithm display names.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be loaded, holds no records where
    /// statistics are required, or an artifact cannot be written.
    pub fn execute(self, labels: &AlgorithmLabels) -> Result<(), CliError> {
        match self {
            Commands::Report {
                file,
                detailed,
                json,
            } => commands::report(&file, labels, detailed, json.as_deref()),
            Commands::Table {
                file,
                output,
                delimiter,
            } => commands::table(&file, labels, output.as_deref(), &delimiter),
            Commands::Chart {
                file,
                output,
                pretty,
                views,
            } => commands::chart(&file, labels, output.as_deref(), pretty, &views),
            Commands::Analyze { input, output_dir } => {
                commands::analyze(input.as_deref(), output_dir.as_deref(), labels)
            }
        }
    }
}
