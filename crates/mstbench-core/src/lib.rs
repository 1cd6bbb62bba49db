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

//! MST benchmark analysis.
//!
//! Post-processes the output of the MST benchmark harness, which runs two
//! minimum-spanning-tree algorithms over a fixed suite of graphs, and
//! derives per-graph comparisons, size-bucketed statistics and chart data.
//!
//! ## Pipeline
//!
//! ```text
//! loader ──> categorizer + comparator ──> aggregator ──> report / table / charts
//! ```
//!
//! - **Loader** ([`load_records`]): harness JSON to [`BenchmarkRecord`]s
//! - **Categorizer** ([`category`]): vertex count to [`Category`]
//! - **Comparator** ([`compare`]): winner and [`Speedup`] per record
//! - **Aggregator** ([`aggregate`]): [`CategoryStatistics`] and [`OverallStatistics`]
//! - **Sinks**: [`reporters`] for text and JSON, [`chart`] for renderer input;
//!   the CSV table lives in `mstbench-csv`
//!
//! ## Usage
//!
//! ```no_run
//! use mstbench_core::{Analysis, AnalysisConfig, render_report};
//!
//! # fn main() -> mstbench_core::Result<()> {
//! let config = AnalysisConfig::default();
//! let analysis = Analysis::load(&config)?;
//! let pipeline = analysis.pipeline();
//! let summary = pipeline.summary()?;
//! println!("{}", render_report(&summary, pipeline.labels()));
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod category;
pub mod chart;
pub mod comparator;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod reporters;

pub use aggregator::{
    aggregate, compute_category_statistics, compute_overall_statistics, group_by_category, mean,
    CategoryGroup, CategoryStatistics, OverallStatistics, Summary,
};
pub use category::{
    category, Category, CATEGORY_BOUNDS, LARGE_UPPER_BOUND, MEDIUM_UPPER_BOUND, SMALL_UPPER_BOUND,
};
pub use chart::{prepare_chart_data, ChartData, ChartView, ViewData};
pub use comparator::{analyze_records, compare, AnalyzedRecord, ComparisonResult, Speedup};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result, MAX_INPUT_SIZE};
pub use loader::{load_records, load_records_from_path, load_records_from_value};
pub use pipeline::{Analysis, Pipeline};
pub use record::{Algorithm, AlgorithmLabels, AlgorithmRun, BenchmarkRecord};
pub use reporters::{render_category_detail, render_report};
