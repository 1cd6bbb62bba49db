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

//! Malformed result documents for error-path tests.

/// Documents the loader must reject, as `(description, json)` pairs.
pub fn malformed_documents() -> Vec<(&'static str, String)> {
    let valid_entry = r#"{"graph_id": 1, "input_stats": {"vertices": 10, "edges": 9},
        "prim": {"total_cost": 1, "operations_count": 1, "execution_time_ms": 1.0},
        "kruskal": {"total_cost": 1, "operations_count": 1, "execution_time_ms": 1.0}}"#;

    vec![
        ("not json", "this is not json".to_string()),
        ("truncated", r#"{"results": ["#.to_string()),
        ("missing results", r#"{"graphs": []}"#.to_string()),
        ("results not array", r#"{"results": 5}"#.to_string()),
        ("top level array", "[]".to_string()),
        ("entry not object", r#"{"results": [42]}"#.to_string()),
        (
            "missing vertices",
            r#"{"results": [{"graph_id": 1, "input_stats": {"edges": 9},
                "prim": {"total_cost": 1, "operations_count": 1, "execution_time_ms": 1.0},
                "kruskal": {"operations_count": 1, "execution_time_ms": 1.0}}]}"#
                .to_string(),
        ),
        (
            "string time",
            r#"{"results": [{"graph_id": 1, "input_stats": {"vertices": 10, "edges": 9},
                "prim": {"total_cost": 1, "operations_count": 1, "execution_time_ms": "1.0"},
                "kruskal": {"operations_count": 1, "execution_time_ms": 1.0}}]}"#
                .to_string(),
        ),
        (
            "missing kruskal block",
            r#"{"results": [{"graph_id": 1, "input_stats": {"vertices": 10, "edges": 9},
                "prim": {"total_cost": 1, "operations_count": 1, "execution_time_ms": 1.0}}]}"#
                .to_string(),
        ),
        (
            "duplicate id",
            format!(r#"{{"results": [{}, {}]}}"#, valid_entry, valid_entry),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mstbench_core::{load_records, AnalysisError};

    #[test]
    fn test_all_malformed_documents_rejected() {
        for (name, doc) in malformed_documents() {
            match load_records(&doc) {
                Err(AnalysisError::MalformedInput { .. }) => {}
                other => panic!("{}: expected MalformedInput, got {:?}", name, other),
            }
        }
    }
}
