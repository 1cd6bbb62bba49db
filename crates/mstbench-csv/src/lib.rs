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

//! Flat tabular export of analysed benchmark records.
//!
//! One header row followed by one row per record, in input order:
//!
//! ```text
//! Graph,Category,V,E,Cost,P_Ops,P_Time,K_Ops,K_Time,Winner,Speedup
//! small_1,small,10,9,12,40,5.00,30,7.00,Prim,1.40x
//! ```
//!
//! The operation and time column prefixes are the initials of the
//! algorithm labels, so custom labels produce matching headers. Labels that
//! share an initial fall back to `A_`/`B_`.
//!
//! # Examples
//!
//! ```
//! use mstbench_core::{analyze_records, AlgorithmLabels};
//! use mstbench_csv::to_csv_string;
//!
//! let csv = to_csv_string(&analyze_records(&[]), &AlgorithmLabels::default()).unwrap();
//! assert_eq!(csv, "Graph,Category,V,E,Cost,P_Ops,P_Time,K_Ops,K_Time,Winner,Speedup\n");
//! ```

mod error;
mod to_csv;

pub use error::{Result, TableError};
pub use to_csv::{
    table_header, table_row, to_csv_string, to_csv_string_with_config, write_table,
    write_table_to_path, TableConfig,
};
