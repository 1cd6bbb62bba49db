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

//! Shared test fixtures and utilities for mstbench crates.
//!
//! Provides a record builder, serializers for both harness document
//! layouts, the canonical 35-graph suite and a set of malformed documents,
//! so that loader, table and CLI tests all exercise the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use mstbench_test::{processor_document, RecordBuilder};
//!
//! let record = RecordBuilder::new(1).vertices(10).edges(9).times(5.0, 7.0).build();
//! let json = processor_document(&[record]);
//! assert!(json.contains("\"graph_id\":1"));
//! ```

use mstbench_core::{AlgorithmRun, BenchmarkRecord};
use serde_json::{json, Value};

pub mod errors;
pub mod scenarios;

/// Fluent builder for [`BenchmarkRecord`]s with harmless defaults.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: BenchmarkRecord,
}

impl RecordBuilder {
    /// Starts a record with the given id, 10 vertices, 9 edges and 1ms times.
    pub fn new(id: u64) -> Self {
        Self {
            record: BenchmarkRecord {
                id,
                name: BenchmarkRecord::default_name(id),
                vertex_count: 10,
                edge_count: 9,
                a: AlgorithmRun::new(100.0, 50, 1.0),
                b: AlgorithmRun::new(100.0, 40, 1.0),
            },
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    /// Sets the vertex count.
    pub fn vertices(mut self, v: u64) -> Self {
        self.record.vertex_count = v;
        self
    }

    /// Sets the edge count.
    pub fn edges(mut self, e: u64) -> Self {
        self.record.edge_count = e;
        self
    }

    /// Sets both execution times in milliseconds.
    pub fn times(mut self, a: f64, b: f64) -> Self {
        self.record.a.execution_time_ms = a;
        self.record.b.execution_time_ms = b;
        self
    }

    /// Sets both operation counts.
    pub fn operations(mut self, a: u64, b: u64) -> Self {
        self.record.a.operations_count = a;
        self.record.b.operations_count = b;
        self
    }

    /// Sets the MST cost on both runs.
    pub fn cost(mut self, cost: f64) -> Self {
        self.record.a.total_cost = Some(cost);
        self.record.b.total_cost = Some(cost);
        self
    }

    /// Finishes the record.
    pub fn build(self) -> BenchmarkRecord {
        self.record
    }
}

fn cost_value(cost: Option<f64>) -> Value {
    cost.map(|c| json!(c)).unwrap_or(Value::Null)
}

/// One entry in the processor layout.
pub fn processor_entry(record: &BenchmarkRecord) -> Value {
    let run = |r: &AlgorithmRun| {
        json!({
            "mst_edges": [],
            "total_cost": cost_value(r.total_cost),
            "operations_count": r.operations_count,
            "execution_time_ms": r.execution_time_ms,
        })
    };
    json!({
        "graph_id": record.id,
        "name": record.name,
        "input_stats": {
            "vertices": record.vertex_count,
            "edges": record.edge_count,
        },
        "prim": run(&record.a),
        "kruskal": run(&record.b),
    })
}

/// One entry in the runner layout. Ids are not carried.
pub fn runner_entry(record: &BenchmarkRecord) -> Value {
    json!({
        "name": record.name,
        "vertices": record.vertex_count,
        "edges": record.edge_count,
        "mst_cost": cost_value(record.a.total_cost),
        "prim": {
            "operations": record.a.operations_count,
            "time_ms": record.a.execution_time_ms,
        },
        "kruskal": {
            "operations": record.b.operations_count,
            "time_ms": record.b.execution_time_ms,
        },
    })
}

/// Serializes records as a processor-layout document.
pub fn processor_document(records: &[BenchmarkRecord]) -> String {
    json!({ "results": records.iter().map(processor_entry).collect::<Vec<_>>() }).to_string()
}

/// Serializes records as a runner-layout document.
pub fn runner_document(records: &[BenchmarkRecord]) -> String {
    json!({ "results": records.iter().map(runner_entry).collect::<Vec<_>>() }).to_string()
}

/// The harness's 35-graph suite with deterministic synthetic timings.
///
/// Names follow the harness (`small_1`, `large_4`, ...) but categories are
/// decided by vertex count, so several "large" and all "extra" graphs land
/// in the medium category.
pub fn suite() -> Vec<BenchmarkRecord> {
    let groups: [(&str, u64, u64, u64, u64); 4] = [
        ("small", 10, 5, 2, 2),
        ("medium", 10, 50, 25, 3),
        ("large", 10, 100, 90, 4),
        ("extra", 5, 100, 40, 4),
    ];

    let mut records = Vec::new();
    for (prefix, count, base, step, density) in groups {
        for i in 0..count {
            let id = records.len() as u64 + 1;
            let v = base + i * step;
            let e = (v * density).min(v * (v - 1) / 2);
            // Prim ahead on the sparse end, Kruskal ahead elsewhere.
            let time_a = v as f64 * 0.02;
            let time_b = if i % 3 == 0 {
                time_a * 1.5
            } else {
                e as f64 * 0.003
            };
            records.push(
                RecordBuilder::new(id)
                    .name(format!("{}_{}", prefix, i + 1))
                    .vertices(v)
                    .edges(e)
                    .times(time_a, time_b)
                    .operations(v * v, e * 3)
                    .cost((v * 7) as f64)
                    .build(),
            );
        }
    }
    records
}
