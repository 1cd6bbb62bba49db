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

//! Typed benchmark records.
//!
//! A [`BenchmarkRecord`] is one graph from the harness output with both
//! algorithms' measurements attached. Records are built once by the loader
//! and never mutated afterwards; every derived structure borrows from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two timing sources being compared.
///
/// The harness runs Prim as the first algorithm and Kruskal as the second,
/// but nothing in the analysis depends on which MST algorithm is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First algorithm (the harness's `prim` block).
    A,
    /// Second algorithm (the harness's `kruskal` block).
    B,
}

impl Algorithm {
    /// Both algorithms in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::A, Algorithm::B];
}

/// Display names for the two algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmLabels {
    /// Label for [`Algorithm::A`].
    pub a: String,
    /// Label for [`Algorithm::B`].
    pub b: String,
}

impl AlgorithmLabels {
    /// Creates a label pair.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Returns the label for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> &str {
        match algorithm {
            Algorithm::A => &self.a,
            Algorithm::B => &self.b,
        }
    }

    /// Short prefix for compact column names.
    ///
    /// This is the uppercased first character of the label. When a label is
    /// empty, or both labels share an initial, the prefixes are `A` and `B`.
    pub fn prefix(&self, algorithm: Algorithm) -> String {
        match (initial(&self.a), initial(&self.b)) {
            (Some(a), Some(b)) if a != b => match algorithm {
                Algorithm::A => a,
                Algorithm::B => b,
            },
            _ => match algorithm {
                Algorithm::A => "A".to_string(),
                Algorithm::B => "B".to_string(),
            },
        }
    }
}

fn initial(label: &str) -> Option<String> {
    label.chars().next().map(|c| c.to_uppercase().collect())
}

impl Default for AlgorithmLabels {
    fn default() -> Self {
        Self::new("Prim", "Kruskal")
    }
}

/// One algorithm's measured outcome on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Total MST weight, when the harness reported it for this algorithm.
    pub total_cost: Option<f64>,
    /// Counted elementary operations.
    pub operations_count: u64,
    /// Wall-clock execution time in milliseconds.
    pub execution_time_ms: f64,
}

impl AlgorithmRun {
    /// Creates a run with a known cost.
    pub fn new(total_cost: f64, operations_count: u64, execution_time_ms: f64) -> Self {
        Self {
            total_cost: Some(total_cost),
            operations_count,
            execution_time_ms,
        }
    }
}

/// Benchmark result for a single input graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Stable identifier, unique within a document.
    pub id: u64,
    /// Display name, `graph_<id>` when the harness did not provide one.
    pub name: String,
    /// Number of vertices.
    pub vertex_count: u64,
    /// Number of edges.
    pub edge_count: u64,
    /// Outcome for [`Algorithm::A`].
    pub a: AlgorithmRun,
    /// Outcome for [`Algorithm::B`].
    pub b: AlgorithmRun,
}

impl BenchmarkRecord {
    /// Synthetic display name used when an entry carries no `name`.
    pub fn default_name(id: u64) -> String {
        format!("graph_{}", id)
    }

    /// Returns the run for one algorithm.
    pub fn run(&self, algorithm: Algorithm) -> &AlgorithmRun {
        match algorithm {
            Algorithm::A => &self.a,
            Algorithm::B => &self.b,
        }
    }

    /// MST cost of the graph as reported for algorithm A.
    pub fn cost(&self) -> Option<f64> {
        self.a.total_cost
    }

    /// Execution times as `(a, b)`.
    pub fn times(&self) -> (f64, f64) {
        (self.a.execution_time_ms, self.b.execution_time_ms)
    }
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (V={}, E={})",
            self.name, self.vertex_count, self.edge_count
        )
    }
}
