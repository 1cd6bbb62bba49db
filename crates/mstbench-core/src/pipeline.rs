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

//! Shared analysis pipeline.
//!
//! [`Analysis`] owns the loaded records. [`Pipeline`] categorizes, compares
//! and groups them and computes the per-category statistics exactly once;
//! the report, table and chart sinks all read from the same [`Pipeline`] and
//! only differ in how they render.

use crate::aggregator::{
    compute_category_statistics, compute_overall_statistics, group_by_category, CategoryGroup,
    CategoryStatistics, Summary,
};
use crate::chart::{prepare_chart_data, ChartData, ChartView};
use crate::comparator::{analyze_records, AnalyzedRecord};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::{load_records, load_records_from_path};
use crate::record::{AlgorithmLabels, BenchmarkRecord};
use tracing::{debug, info};

/// Loaded benchmark records plus display labels.
#[derive(Debug, Clone)]
pub struct Analysis {
    records: Vec<BenchmarkRecord>,
    labels: AlgorithmLabels,
}

impl Analysis {
    /// Wraps already-loaded records.
    pub fn new(records: Vec<BenchmarkRecord>, labels: AlgorithmLabels) -> Self {
        Self { records, labels }
    }

    /// Parses a result document.
    pub fn from_document(json: &str, labels: AlgorithmLabels) -> Result<Self> {
        Ok(Self::new(load_records(json)?, labels))
    }

    /// Loads the input document named by `config`.
    pub fn load(config: &AnalysisConfig) -> Result<Self> {
        let records = load_records_from_path(config.input_path(), config.max_input_size)?;
        info!(
            path = %config.input_path().display(),
            records = records.len(),
            "loaded benchmark results"
        );
        Ok(Self::new(records, config.labels.clone()))
    }

    /// The loaded records in input order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Display labels.
    pub fn labels(&self) -> &AlgorithmLabels {
        &self.labels
    }

    /// Runs every stage that does not depend on the output format.
    pub fn pipeline(&self) -> Pipeline<'_> {
        let records = analyze_records(&self.records);
        let groups = group_by_category(&records);
        let categories = groups.iter().map(compute_category_statistics).collect();
        debug!(
            records = records.len(),
            categories = groups.len(),
            "prepared analysis pipeline"
        );
        Pipeline {
            records,
            groups,
            categories,
            labels: &self.labels,
        }
    }
}

/// Categorized, compared and grouped records, ready for any sink.
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    records: Vec<AnalyzedRecord<'a>>,
    groups: Vec<CategoryGroup<'a>>,
    categories: Vec<CategoryStatistics>,
    labels: &'a AlgorithmLabels,
}

impl<'a> Pipeline<'a> {
    /// Analysed records in input order.
    pub fn records(&self) -> &[AnalyzedRecord<'a>] {
        &self.records
    }

    /// Display labels.
    pub fn labels(&self) -> &AlgorithmLabels {
        self.labels
    }

    /// Records partitioned by category, non-empty categories only.
    pub fn groups(&self) -> &[CategoryGroup<'a>] {
        &self.groups
    }

    /// Statistics for each entry of [`Pipeline::groups`], in the same order.
    pub fn categories(&self) -> &[CategoryStatistics] {
        &self.categories
    }

    /// Category and overall statistics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::EmptyInput`] when there are no records.
    pub fn summary(&self) -> Result<Summary> {
        Ok(Summary {
            overall: compute_overall_statistics(&self.records)?,
            categories: self.categories.clone(),
        })
    }

    /// Chart series for the requested views.
    pub fn chart_data(&self, views: &[ChartView]) -> ChartData {
        prepare_chart_data(self, views)
    }
}
