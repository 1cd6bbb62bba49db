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

//! Size categories.
//!
//! Graphs are binned by vertex count into four fixed categories. The bins
//! are an ordered table of exclusive upper bounds; the last category is
//! open-ended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive upper bound of the `small` category.
pub const SMALL_UPPER_BOUND: u64 = 30;
/// Exclusive upper bound of the `medium` category.
pub const MEDIUM_UPPER_BOUND: u64 = 300;
/// Exclusive upper bound of the `large` category.
pub const LARGE_UPPER_BOUND: u64 = 1000;

/// Bounded categories in ascending order. Anything at or above the last
/// bound is [`Category::Extra`].
pub const CATEGORY_BOUNDS: [(u64, Category); 3] = [
    (SMALL_UPPER_BOUND, Category::Small),
    (MEDIUM_UPPER_BOUND, Category::Medium),
    (LARGE_UPPER_BOUND, Category::Large),
];

/// Graph size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fewer than 30 vertices.
    Small,
    /// 30 to 299 vertices.
    Medium,
    /// 300 to 999 vertices.
    Large,
    /// 1000 vertices or more.
    Extra,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Small,
        Category::Medium,
        Category::Large,
        Category::Extra,
    ];

    /// Returns the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Small => "small",
            Category::Medium => "medium",
            Category::Large => "large",
            Category::Extra => "extra",
        }
    }

    /// Returns the category name with a leading capital, for chart labels.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Small => "Small",
            Category::Medium => "Medium",
            Category::Large => "Large",
            Category::Extra => "Extra",
        }
    }

    /// Position of the category in report order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a vertex count to its size category.
///
/// # Examples
///
/// ```
/// use mstbench_core::{category, Category};
///
/// assert_eq!(category(29), Category::Small);
/// assert_eq!(category(30), Category::Medium);
/// assert_eq!(category(5_000), Category::Extra);
/// ```
pub fn category(vertex_count: u64) -> Category {
    CATEGORY_BOUNDS
        .iter()
        .find(|(upper, _)| vertex_count < *upper)
        .map(|(_, cat)| *cat)
        .unwrap_or(Category::Extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(category(0), Category::Small);
        assert_eq!(category(SMALL_UPPER_BOUND - 1), Category::Small);
        assert_eq!(category(SMALL_UPPER_BOUND), Category::Medium);
        assert_eq!(category(MEDIUM_UPPER_BOUND - 1), Category::Medium);
        assert_eq!(category(MEDIUM_UPPER_BOUND), Category::Large);
        assert_eq!(category(LARGE_UPPER_BOUND - 1), Category::Large);
        assert_eq!(category(LARGE_UPPER_BOUND), Category::Extra);
        assert_eq!(category(u64::MAX), Category::Extra);
    }

    #[test]
    fn test_bound_constants() {
        assert_eq!(SMALL_UPPER_BOUND, 30);
        assert_eq!(MEDIUM_UPPER_BOUND, 300);
        assert_eq!(LARGE_UPPER_BOUND, 1000);
    }

    #[test]
    fn test_bounds_table_is_ascending() {
        for pair in CATEGORY_BOUNDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_order_and_index() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
        assert!(Category::Small < Category::Extra);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Category::Small.as_str(), "small");
        assert_eq!(Category::Extra.to_string(), "extra");
        assert_eq!(Category::Medium.title(), "Medium");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Large).unwrap();
        assert_eq!(json, "\"large\"");
    }
}
