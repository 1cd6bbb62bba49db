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

//! Property-based tests for CLI argument handling and table output.

use assert_cmd::Command;
use mstbench_cli::commands::{parse_delimiter, parse_views};
use mstbench_core::ChartView;
use mstbench_test::{processor_document, RecordBuilder};
use proptest::prelude::*;
use std::fs;

fn mstbench() -> Command {
    Command::cargo_bin("mstbench").expect("Failed to find mstbench binary")
}

proptest! {
    #[test]
    fn prop_single_ascii_delimiter_accepted(c in prop::char::range('!', '~')) {
        prop_assume!(c != '"');
        prop_assert_eq!(parse_delimiter(&c.to_string()).unwrap(), c as u8);
    }

    #[test]
    fn prop_multi_char_delimiter_rejected(s in "[a-z;,|]{2,6}") {
        prop_assert!(parse_delimiter(&s).is_err());
    }

    #[test]
    fn prop_every_view_name_parses(idx in 0usize..ChartView::ALL.len()) {
        let view = ChartView::ALL[idx];
        let parsed = parse_views(&[view.as_str().to_string()]).unwrap();
        prop_assert_eq!(parsed, vec![view]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_table_rows_match_records(
        shapes in prop::collection::vec((1u64..2_000, 0.0f64..50.0, 0.0f64..50.0), 0..20)
    ) {
        let records: Vec<_> = shapes
            .iter()
            .enumerate()
            .map(|(i, &(v, ta, tb))| {
                RecordBuilder::new(i as u64 + 1).vertices(v).times(ta, tb).build()
            })
            .collect();

        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        fs::write(file.path(), processor_document(&records)).unwrap();

        let output = mstbench().arg("table").arg(file.path()).output().unwrap();
        prop_assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        prop_assert_eq!(stdout.lines().count(), records.len() + 1);
    }
}
