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

//! Benchmarks for the analysis pipeline over the harness suite.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mstbench_core::{
    aggregate, analyze_records, load_records, render_report, AlgorithmLabels, Analysis,
    BenchmarkRecord, ChartView,
};
use mstbench_test::{processor_document, suite};

/// The suite repeated `copies` times with fresh ids.
fn scaled_suite(copies: usize) -> Vec<BenchmarkRecord> {
    let base = suite();
    let len = base.len();
    (0..copies)
        .flat_map(|c| {
            base.iter().cloned().map(move |mut r| {
                r.id += (c * len) as u64;
                r
            })
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for copies in [1, 10, 100] {
        let doc = processor_document(&scaled_suite(copies));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &doc, |b, doc| {
            b.iter(|| load_records(black_box(doc)))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for copies in [1, 10, 100] {
        let analysis = Analysis::new(scaled_suite(copies), AlgorithmLabels::default());
        group.bench_with_input(BenchmarkId::from_parameter(copies), &analysis, |b, analysis| {
            b.iter(|| {
                let pipeline = black_box(analysis).pipeline();
                let summary = pipeline.summary();
                let charts = pipeline.chart_data(&ChartView::ALL);
                (summary, charts)
            })
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let records = suite();
    let labels = AlgorithmLabels::default();
    let analyzed = analyze_records(&records);
    if let Ok(summary) = aggregate(&analyzed) {
        c.bench_function("render_report", |b| {
            b.iter(|| render_report(black_box(&summary), &labels))
        });
    }
}

criterion_group!(benches, bench_load, bench_analyze, bench_report);
criterion_main!(benches);
