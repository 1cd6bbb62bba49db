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

//! Report renderers for analysis results.
//!
//! # Modules
//!
//! - `console`: Human-readable text report
//! - `json`: JSON export of statistics and chart data

pub mod console;
pub mod json;

pub use console::{render_category_detail, render_report, CategoryDetail, ConsoleReport};
pub use json::{
    export_chart_json, export_summary_json, to_chart_json, to_summary_json, SummaryDocument,
};
