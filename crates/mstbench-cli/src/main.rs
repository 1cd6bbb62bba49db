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

//! MSTBench Command Line Interface

use clap::Parser;
use mstbench_cli::cli::Commands;
use mstbench_core::AlgorithmLabels;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// MSTBench - Prim vs Kruskal benchmark analysis
///
/// Loads the JSON document written by the MST benchmark harness and turns
/// it into a console report, a flat CSV table and chart-ready data series.
///
/// # Examples
///
/// ```bash
/// # Print the category and overall statistics
/// mstbench report results/output.json
///
/// # Export the per-graph table
/// mstbench table results/output.json --output results/results.csv
///
/// # Full run: table, summary JSON and chart data into results/
/// mstbench analyze
/// ```
#[derive(Parser)]
#[command(name = "mstbench")]
#[command(
    author,
    version,
    about = "MSTBench - Prim vs Kruskal benchmark analysis",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Display name for the first algorithm
    #[arg(long, default_value = "Prim", global = true)]
    label_a: String,

    /// Display name for the second algorithm
    #[arg(long, default_value = "Kruskal", global = true)]
    label_b: String,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG replaces the verbosity flags entirely.
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("mstbench={}", level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let labels = AlgorithmLabels::new(cli.label_a, cli.label_b);
    match cli.command.execute(&labels) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
