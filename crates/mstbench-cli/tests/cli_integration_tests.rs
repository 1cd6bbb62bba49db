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

//! Integration tests for the mstbench binary.

use assert_cmd::Command;
use mstbench_test::{errors::malformed_documents, processor_document, runner_document, suite};
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// ===== Test Helpers =====

/// Create a temporary JSON file with content
fn temp_json(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn mstbench() -> Command {
    Command::cargo_bin("mstbench").expect("Failed to find mstbench binary")
}

fn suite_file() -> NamedTempFile {
    temp_json(&processor_document(&suite()))
}

const EMPTY: &str = r#"{"results": []}"#;

// ===== Report =====

#[test]
fn test_report_suite() {
    let input = suite_file();
    mstbench()
        .arg("report")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MST ALGORITHMS PERFORMANCE ANALYSIS"))
        .stdout(predicate::str::contains("SMALL (10 graphs):"))
        .stdout(predicate::str::contains("MEDIUM (18 graphs):"))
        .stdout(predicate::str::contains("LARGE (7 graphs):"))
        .stdout(predicate::str::contains("EXTRA").not())
        .stdout(predicate::str::contains("Total graphs: 35"))
        .stdout(predicate::str::contains("Prim faster: 14 (40.0%)"))
        .stdout(predicate::str::contains("Kruskal faster: 21 (60.0%)"));
}

#[test]
fn test_report_runner_layout() {
    let input = temp_json(&runner_document(&suite()));
    mstbench()
        .arg("report")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total graphs: 35"));
}

#[test]
fn test_report_detailed() {
    let input = suite_file();
    mstbench()
        .args(["report", "--detailed"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PERFORMANCE DETAIL"))
        .stdout(predicate::str::contains("Small Graphs:"))
        .stdout(predicate::str::contains("small_1"));
}

#[test]
fn test_report_custom_labels() {
    let input = suite_file();
    mstbench()
        .args(["--label-a", "Boruvka", "report"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Boruvka faster: 14"));
}

#[test]
fn test_report_writes_summary_json() {
    let input = suite_file();
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("summary.json");

    mstbench()
        .arg("report")
        .arg(input.path())
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();

    let written = fs::read_to_string(&json_path).unwrap();
    assert!(written.contains("\"overall\""));
    assert!(written.contains("\"total\": 35"));
}

#[test]
fn test_report_empty_input_fails() {
    let input = temp_json(EMPTY);
    mstbench()
        .arg("report")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No benchmark records to analyse"));
}

#[test]
fn test_report_missing_file_fails() {
    mstbench()
        .args(["report", "no/such/output.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_malformed_documents_fail() {
    for (name, doc) in malformed_documents() {
        let input = temp_json(&doc);
        let output = mstbench().arg("report").arg(input.path()).output().unwrap();
        assert!(!output.status.success(), "{} should fail", name);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Malformed input"), "{}: {}", name, stderr);
    }
}

// ===== Table =====

#[test]
fn test_table_to_stdout() {
    let input = suite_file();
    let output = mstbench().arg("table").arg(input.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 36);
    assert_eq!(
        lines[0],
        "Graph,Category,V,E,Cost,P_Ops,P_Time,K_Ops,K_Time,Winner,Speedup"
    );
}

#[test]
fn test_table_empty_input_is_header_only() {
    let input = temp_json(EMPTY);
    mstbench()
        .arg("table")
        .arg(input.path())
        .assert()
        .success()
        .stdout("Graph,Category,V,E,Cost,P_Ops,P_Time,K_Ops,K_Time,Winner,Speedup\n");
}

#[test]
fn test_table_to_file_with_delimiter() {
    let input = suite_file();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.tsv");

    mstbench()
        .arg("table")
        .arg(input.path())
        .args(["--delimiter", "tab", "--output"])
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Graph\tCategory\t"));
    assert_eq!(written.lines().count(), 36);
}

#[test]
fn test_table_bad_delimiter() {
    let input = suite_file();
    mstbench()
        .arg("table")
        .arg(input.path())
        .args(["--delimiter", ";;"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

// ===== Chart =====

#[test]
fn test_chart_all_views() {
    let input = suite_file();
    mstbench()
        .args(["chart", "--pretty"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time_vs_vertices\""))
        .stdout(predicate::str::contains("\"category_time_series\""));
}

#[test]
fn test_chart_single_view() {
    let input = suite_file();
    mstbench()
        .arg("chart")
        .arg(input.path())
        .args(["--view", "wins_by_category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"wins_by_category\""))
        .stdout(predicate::str::contains("\"time_vs_edges\"").not());
}

#[test]
fn test_chart_unknown_view() {
    let input = suite_file();
    mstbench()
        .arg("chart")
        .arg(input.path())
        .args(["--view", "pie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chart view 'pie'"));
}

// ===== Analyze =====

#[test]
fn test_analyze_writes_artifacts() {
    let input = suite_file();
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("results");

    mstbench()
        .arg("analyze")
        .arg("--input")
        .arg(input.path())
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERALL STATISTICS:"));

    let table = fs::read_to_string(out_dir.join("results.csv")).unwrap();
    assert_eq!(table.lines().count(), 36);
    assert!(out_dir.join("summary.json").exists());
    assert!(out_dir.join("chart_data.json").exists());
}

#[test]
fn test_analyze_empty_input_writes_nothing() {
    let input = temp_json(EMPTY);
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("results");

    mstbench()
        .arg("analyze")
        .arg("--input")
        .arg(input.path())
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .failure();

    assert!(!out_dir.exists());
}
