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

//! Benchmark result loading.
//!
//! Parses the harness's JSON output into [`BenchmarkRecord`]s, preserving
//! entry order. Two entry layouts are accepted:
//!
//! - **Processor layout**: `graph_id`, `input_stats.{vertices,edges}` and
//!   per-algorithm `{total_cost, operations_count, execution_time_ms}`.
//! - **Runner layout**: `name`, top-level `vertices`/`edges`/`mst_cost` and
//!   per-algorithm `{operations, time_ms}`.
//!
//! An entry is read with the processor layout iff it has `input_stats`.
//! Numeric fields are never coerced: a string where a number is expected,
//! a negative count or a non-finite time rejects the whole document.

use crate::error::{AnalysisError, Result};
use crate::record::{AlgorithmRun, BenchmarkRecord};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the top-level collection in a result document.
pub const RESULTS_KEY: &str = "results";
/// Harness key for the first algorithm's block.
pub const ALGORITHM_A_KEY: &str = "prim";
/// Harness key for the second algorithm's block.
pub const ALGORITHM_B_KEY: &str = "kruskal";

type JsonObject = Map<String, Value>;

/// Parses a result document from a JSON string.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedInput`] if the text is not JSON, lacks
/// the `results` array, or any entry lacks a required numeric field.
///
/// # Examples
///
/// ```
/// use mstbench_core::load_records;
///
/// let json = r#"{"results": [{
///     "graph_id": 1,
///     "input_stats": {"vertices": 10, "edges": 9},
///     "prim": {"total_cost": 40, "operations_count": 120, "execution_time_ms": 5.0},
///     "kruskal": {"total_cost": 40, "operations_count": 90, "execution_time_ms": 7.0}
/// }]}"#;
///
/// let records = load_records(json).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "graph_1");
/// ```
pub fn load_records(json: &str) -> Result<Vec<BenchmarkRecord>> {
    let value: Value = serde_json::from_str(json)?;
    load_records_from_value(&value)
}

/// Parses a result document that has already been decoded to a JSON value.
pub fn load_records_from_value(value: &Value) -> Result<Vec<BenchmarkRecord>> {
    let entries = value
        .as_object()
        .and_then(|root| root.get(RESULTS_KEY))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AnalysisError::malformed(format!("missing top-level '{}' array", RESULTS_KEY))
        })?;

    let parsed = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect::<Result<Vec<_>>>()?;

    // Explicit ids are reserved first so positional ids can step around them.
    let mut used = HashSet::with_capacity(parsed.len());
    for (index, entry) in parsed.iter().enumerate() {
        if entry.explicit_id && !used.insert(entry.record.id) {
            return Err(AnalysisError::malformed_entry(
                index,
                format!("duplicate graph id {}", entry.record.id),
            ));
        }
    }

    let mut next_free = used.iter().copied().max().map_or(1, |max: u64| max.saturating_add(1));
    let mut records = Vec::with_capacity(parsed.len());
    for (index, entry) in parsed.into_iter().enumerate() {
        let mut record = entry.record;
        if !entry.explicit_id && !used.insert(record.id) {
            while used.contains(&next_free) {
                next_free = next_free.checked_add(1).ok_or_else(|| {
                    AnalysisError::malformed_entry(index, "no graph id left to assign")
                })?;
            }
            debug!(
                entry = index,
                from = record.id,
                to = next_free,
                "positional id taken by an explicit graph_id, reassigned"
            );
            record.id = next_free;
            used.insert(next_free);
            if !entry.named {
                record.name = BenchmarkRecord::default_name(record.id);
            }
        }
        check_consistency(&record);
        records.push(record);
    }

    debug!(count = records.len(), "loaded benchmark records");
    Ok(records)
}

/// Reads and parses a result document from disk.
///
/// Files larger than `max_size` bytes are rejected before reading.
pub fn load_records_from_path(path: &Path, max_size: u64) -> Result<Vec<BenchmarkRecord>> {
    let metadata = fs::metadata(path).map_err(|e| AnalysisError::io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(AnalysisError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_size,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| AnalysisError::io_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read result document");
    load_records(&content)
}

/// A parsed entry plus what the loader still needs to settle its identity.
struct ParsedEntry {
    record: BenchmarkRecord,
    /// The id came from `graph_id` rather than the entry's position.
    explicit_id: bool,
    /// The entry carried its own name.
    named: bool,
}

fn parse_entry(index: usize, entry: &Value) -> Result<ParsedEntry> {
    let obj = entry
        .as_object()
        .ok_or_else(|| AnalysisError::malformed_entry(index, "entry is not an object"))?;

    if obj.contains_key("input_stats") {
        parse_processor_entry(index, obj)
    } else {
        parse_runner_entry(index, obj)
    }
}

fn parse_processor_entry(index: usize, obj: &JsonObject) -> Result<ParsedEntry> {
    let id = require_u64(index, obj, "graph_id", "graph_id")?;
    let stats = require_object(index, obj, "input_stats", "input_stats")?;
    let vertex_count = require_u64(index, stats, "vertices", "input_stats.vertices")?;
    let edge_count = require_u64(index, stats, "edges", "input_stats.edges")?;

    let a_block = require_object(index, obj, ALGORITHM_A_KEY, ALGORITHM_A_KEY)?;
    let b_block = require_object(index, obj, ALGORITHM_B_KEY, ALGORITHM_B_KEY)?;

    let a_cost = require_number(
        index,
        a_block,
        "total_cost",
        &format!("{}.total_cost", ALGORITHM_A_KEY),
    )?;
    let a = processor_run(index, a_block, ALGORITHM_A_KEY, Some(a_cost))?;
    let b_cost = optional_number(
        index,
        b_block,
        "total_cost",
        &format!("{}.total_cost", ALGORITHM_B_KEY),
    )?;
    let b = processor_run(index, b_block, ALGORITHM_B_KEY, b_cost)?;
    let name = optional_name(index, obj)?;

    Ok(ParsedEntry {
        named: name.is_some(),
        explicit_id: true,
        record: BenchmarkRecord {
            id,
            name: name.unwrap_or_else(|| BenchmarkRecord::default_name(id)),
            vertex_count,
            edge_count,
            a,
            b,
        },
    })
}

fn processor_run(
    index: usize,
    block: &JsonObject,
    key: &str,
    total_cost: Option<f64>,
) -> Result<AlgorithmRun> {
    Ok(AlgorithmRun {
        total_cost,
        operations_count: require_u64(
            index,
            block,
            "operations_count",
            &format!("{}.operations_count", key),
        )?,
        execution_time_ms: require_time(
            index,
            block,
            "execution_time_ms",
            &format!("{}.execution_time_ms", key),
        )?,
    })
}

fn parse_runner_entry(index: usize, obj: &JsonObject) -> Result<ParsedEntry> {
    // Runner output has no graph_id; position is the only stable identity.
    let explicit_id = obj.contains_key("graph_id");
    let id = if explicit_id {
        require_u64(index, obj, "graph_id", "graph_id")?
    } else {
        index as u64 + 1
    };
    let vertex_count = require_u64(index, obj, "vertices", "vertices")?;
    let edge_count = require_u64(index, obj, "edges", "edges")?;
    let cost = require_number(index, obj, "mst_cost", "mst_cost")?;

    let a_block = require_object(index, obj, ALGORITHM_A_KEY, ALGORITHM_A_KEY)?;
    let b_block = require_object(index, obj, ALGORITHM_B_KEY, ALGORITHM_B_KEY)?;
    let name = optional_name(index, obj)?;

    Ok(ParsedEntry {
        named: name.is_some(),
        explicit_id,
        record: BenchmarkRecord {
            id,
            name: name.unwrap_or_else(|| BenchmarkRecord::default_name(id)),
            vertex_count,
            edge_count,
            a: runner_run(index, a_block, ALGORITHM_A_KEY, Some(cost))?,
            b: runner_run(index, b_block, ALGORITHM_B_KEY, None)?,
        },
    })
}

fn runner_run(
    index: usize,
    block: &JsonObject,
    key: &str,
    total_cost: Option<f64>,
) -> Result<AlgorithmRun> {
    Ok(AlgorithmRun {
        total_cost,
        operations_count: require_u64(
            index,
            block,
            "operations",
            &format!("{}.operations", key),
        )?,
        execution_time_ms: require_time(index, block, "time_ms", &format!("{}.time_ms", key))?,
    })
}

fn check_consistency(record: &BenchmarkRecord) {
    if let (Some(a), Some(b)) = (record.a.total_cost, record.b.total_cost) {
        if a != b {
            warn!(
                graph = %record.name,
                cost_a = a,
                cost_b = b,
                "algorithms disagree on MST cost"
            );
        }
    }
    if record.vertex_count > 0 && record.edge_count < record.vertex_count - 1 {
        warn!(
            graph = %record.name,
            vertices = record.vertex_count,
            edges = record.edge_count,
            "edge count too small for a connected graph"
        );
    }
}

fn missing(index: usize, path: &str) -> AnalysisError {
    AnalysisError::malformed_entry(index, format!("missing field '{}'", path))
}

fn require_object<'a>(
    index: usize,
    obj: &'a JsonObject,
    key: &str,
    path: &str,
) -> Result<&'a JsonObject> {
    match obj.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(AnalysisError::malformed_entry(
            index,
            format!("field '{}' must be an object", path),
        )),
        None => Err(missing(index, path)),
    }
}

fn require_u64(index: usize, obj: &JsonObject, key: &str, path: &str) -> Result<u64> {
    let value = obj.get(key).ok_or_else(|| missing(index, path))?;
    value.as_u64().ok_or_else(|| {
        AnalysisError::malformed_entry(
            index,
            format!("field '{}' must be a non-negative integer, got {}", path, value),
        )
    })
}

fn require_number(index: usize, obj: &JsonObject, key: &str, path: &str) -> Result<f64> {
    optional_number(index, obj, key, path)?.ok_or_else(|| missing(index, path))
}

fn optional_number(index: usize, obj: &JsonObject, key: &str, path: &str) -> Result<Option<f64>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| {
                AnalysisError::malformed_entry(
                    index,
                    format!("field '{}' must be a number, got {}", path, value),
                )
            }),
    }
}

fn require_time(index: usize, obj: &JsonObject, key: &str, path: &str) -> Result<f64> {
    let time = require_number(index, obj, key, path)?;
    if time < 0.0 {
        return Err(AnalysisError::malformed_entry(
            index,
            format!("field '{}' must be non-negative, got {}", path, time),
        ));
    }
    Ok(time)
}

fn optional_name(index: usize, obj: &JsonObject) -> Result<Option<String>> {
    match obj.get("name") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AnalysisError::malformed_entry(
            index,
            format!("field 'name' must be a string, got {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn processor_entry(id: u64, vertices: u64, time_a: f64, time_b: f64) -> Value {
        json!({
            "graph_id": id,
            "input_stats": {"vertices": vertices, "edges": vertices + 5},
            "prim": {"total_cost": 100, "operations_count": 500, "execution_time_ms": time_a},
            "kruskal": {"total_cost": 100, "operations_count": 400, "execution_time_ms": time_b}
        })
    }

    fn load(value: Value) -> Result<Vec<BenchmarkRecord>> {
        load_records_from_value(&value)
    }

    #[test]
    fn test_load_processor_layout() {
        let records = load(json!({"results": [processor_entry(4, 12, 1.25, 0.5)]})).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, 4);
        assert_eq!(r.name, "graph_4");
        assert_eq!(r.vertex_count, 12);
        assert_eq!(r.edge_count, 17);
        assert_eq!(r.a.total_cost, Some(100.0));
        assert_eq!(r.a.operations_count, 500);
        assert_eq!(r.b.execution_time_ms, 0.5);
    }

    #[test]
    fn test_load_preserves_order() {
        let records = load(json!({"results": [
            processor_entry(9, 1500, 1.0, 2.0),
            processor_entry(2, 10, 1.0, 2.0),
            processor_entry(5, 400, 1.0, 2.0),
        ]}))
        .unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_load_uses_name_when_present() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["name"] = json!("small_1");
        let records = load(json!({"results": [entry]})).unwrap();
        assert_eq!(records[0].name, "small_1");
    }

    #[test]
    fn test_load_runner_layout() {
        let records = load(json!({"results": [{
            "name": "medium_3",
            "vertices": 120,
            "edges": 400,
            "mst_cost": 812,
            "prim": {"operations": 1000, "time_ms": 0.75},
            "kruskal": {"operations": 900, "time_ms": 0.5}
        }]}))
        .unwrap();
        let r = &records[0];
        assert_eq!(r.id, 1);
        assert_eq!(r.name, "medium_3");
        assert_eq!(r.cost(), Some(812.0));
        assert_eq!(r.b.total_cost, None);
        assert_eq!(r.b.operations_count, 900);
    }

    #[test]
    fn test_empty_results_is_not_an_error() {
        let records = load(json!({"results": []})).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_results_collection() {
        let err = load(json!({"graphs": []})).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::malformed("missing top-level 'results' array")
        );
    }

    #[test]
    fn test_results_not_an_array() {
        assert!(load(json!({"results": {"a": 1}})).is_err());
    }

    #[test]
    fn test_missing_nested_field() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["kruskal"]
            .as_object_mut()
            .unwrap()
            .remove("execution_time_ms");
        let err = load(json!({"results": [processor_entry(0, 5, 1.0, 1.0), entry]})).unwrap_err();
        match err {
            AnalysisError::MalformedInput { entry, message } => {
                assert_eq!(entry, Some(1));
                assert!(message.contains("kruskal.execution_time_ms"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_string_number_is_not_coerced() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["input_stats"]["vertices"] = json!("10");
        let err = load(json!({"results": [entry]})).unwrap_err();
        assert!(err.to_string().contains("input_stats.vertices"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["input_stats"]["edges"] = json!(-3);
        assert!(load(json!({"results": [entry]})).is_err());
    }

    #[test]
    fn test_negative_time_rejected() {
        let entry = processor_entry(1, 10, -1.0, 2.0);
        let err = load(json!({"results": [entry]})).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_missing_prim_cost_rejected() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["prim"].as_object_mut().unwrap().remove("total_cost");
        assert!(load(json!({"results": [entry]})).is_err());
    }

    #[test]
    fn test_kruskal_cost_optional() {
        let mut entry = processor_entry(1, 10, 1.0, 2.0);
        entry["kruskal"].as_object_mut().unwrap().remove("total_cost");
        let records = load(json!({"results": [entry]})).unwrap();
        assert_eq!(records[0].b.total_cost, None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = load(json!({"results": [
            processor_entry(1, 10, 1.0, 2.0),
            processor_entry(1, 20, 1.0, 2.0),
        ]}))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate graph id 1"));
    }

    fn runner_entry(name: Option<&str>) -> Value {
        let mut entry = json!({
            "vertices": 12,
            "edges": 20,
            "mst_cost": 50,
            "prim": {"operations": 100, "time_ms": 1.0},
            "kruskal": {"operations": 90, "time_ms": 2.0}
        });
        if let Some(name) = name {
            entry["name"] = json!(name);
        }
        entry
    }

    #[test]
    fn test_mixed_layouts_keep_explicit_ids() {
        let records = load(json!({"results": [
            runner_entry(Some("small_1")),
            processor_entry(1, 10, 1.0, 2.0),
        ]}))
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, 1);
        assert_eq!(records[0].id, 2);
        assert_eq!(records[0].name, "small_1");
    }

    #[test]
    fn test_positional_id_steps_around_later_explicit_ids() {
        let records = load(json!({"results": [
            runner_entry(None),
            processor_entry(1, 10, 1.0, 2.0),
            processor_entry(2, 10, 1.0, 2.0),
            runner_entry(None),
        ]}))
        .unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(records[0].name, "graph_3");
        assert_eq!(records[3].name, "graph_4");
    }

    #[test]
    fn test_ignores_mst_edges() {
        let mut entry = processor_entry(1, 3, 1.0, 2.0);
        entry["prim"]["mst_edges"] = json!([{"from": 0, "to": 1, "weight": 4}]);
        assert!(load(json!({"results": [entry]})).is_ok());
    }

    #[test]
    fn test_invalid_json_text() {
        let err = load_records("{\"results\": [").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedInput { entry: None, .. }));
    }

    #[test]
    fn test_load_from_path_too_large() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "{\"results\": []}").unwrap();
        let err = load_records_from_path(file.path(), 4).unwrap_err();
        assert!(matches!(err, AnalysisError::FileTooLarge { max: 4, .. }));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err =
            load_records_from_path(Path::new("/nonexistent/output.json"), 1024).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
