// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structural comparison of profile documents.

use oneview_core::Document;
use oneview_core::JsonValue;

/// Returns `true` if `merged` differs from `current` in a way that
/// requires an update.
///
/// Comparison is structural:
/// - a missing key is the same as explicit `null`;
/// - lists are compared as multisets, element order does not matter;
/// - numbers are compared by value (`1` is the same as `1.0`).
#[must_use]
pub fn has_changes(current: &Document, merged: &Document) -> bool {
    !same_documents(current, merged)
}

fn same_documents(a: &Document, b: &Document) -> bool {
    a.iter()
        .all(|(key, v)| same_values(v, b.get(key).unwrap_or(&JsonValue::Null)))
        && b.iter()
            .filter(|(key, _)| !a.contains_key(*key))
            .all(|(_, v)| v.is_null())
}

fn same_values(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Object(a), JsonValue::Object(b)) => same_documents(a, b),
        (JsonValue::Array(a), JsonValue::Array(b)) => same_multisets(a, b),
        (JsonValue::Number(x), JsonValue::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        _ => a == b,
    }
}

fn same_multisets(a: &[JsonValue], b: &[JsonValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        let found = b
            .iter()
            .enumerate()
            .find(|(idx, y)| !used[*idx] && same_values(x, y))
            .map(|(idx, _)| idx);
        if let Some(idx) = found {
            used[idx] = true;
        }
        found.is_some()
    })
}
