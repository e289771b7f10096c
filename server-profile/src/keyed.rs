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

//! Identity-keyed lists.
//!
//! Lists of sub-documents such as `connections` or `storagePaths` are
//! merged by identity key, not by position. Desired list is parsed into a
//! [`KeyedList`], then joined with the current list:
//!
//! - current entry whose key is in the desired list: merged with it;
//! - desired entry with no current counterpart: appended;
//! - current entry whose key is not in the desired list: dropped.
//!
//! Matched entries keep current order, appended entries keep desired order.

use crate::InvalidInput;
use oneview_core::Document;
use oneview_core::JsonValue;
use std::collections::BTreeMap;

/// Identity key of a list entry.
pub type Key = i64;

/// Desired list entry with its identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: Key,
    pub value: T,
}

/// Desired list of sub-documents identified by `key_field`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedList<T> {
    key_field: &'static str,
    entries: Vec<Keyed<T>>,
}

impl<T> KeyedList<T> {
    /// Parse desired list located at `path` (used in error messages).
    /// `parse_entry` receives the entry path and the entry document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if value is not a list, an entry is not an
    /// object, has no integer `key_field`, or repeats a key of a previous
    /// entry.
    pub fn parse<F>(
        path: &str,
        key_field: &'static str,
        value: JsonValue,
        mut parse_entry: F,
    ) -> Result<Self, InvalidInput>
    where
        F: FnMut(&str, Document) -> Result<T, InvalidInput>,
    {
        let JsonValue::Array(items) = value else {
            return Err(InvalidInput::new(format!("{path} must be a list")));
        };
        let mut seen = BTreeMap::new();
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let entry_path = format!("{path}[{idx}]");
                let JsonValue::Object(doc) = item else {
                    return Err(InvalidInput::new(format!("{entry_path} must be an object")));
                };
                let key = key_of(&doc, key_field).ok_or_else(|| {
                    InvalidInput::new(format!(
                        "{entry_path} must have integer identity field '{key_field}'"
                    ))
                })?;
                if let Some(first) = seen.insert(key, idx) {
                    return Err(InvalidInput::new(format!(
                        "{entry_path} repeats {key_field} {key} of {path}[{first}]"
                    )));
                }
                Ok(Keyed {
                    key,
                    value: parse_entry(&entry_path, doc)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { key_field, entries })
    }

    /// Join with the `current` list. `merge` is called with the current
    /// entry (empty document for appended entries) and the desired value.
    pub fn join<F>(&self, current: Option<&JsonValue>, merge: F) -> Vec<JsonValue>
    where
        F: Fn(&Document, &T) -> Document,
    {
        let desired = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.key, idx))
            .collect::<BTreeMap<_, _>>();
        let mut used = vec![false; self.entries.len()];
        let mut result = Vec::with_capacity(self.entries.len());

        for doc in current
            .and_then(JsonValue::as_array)
            .into_iter()
            .flatten()
            .filter_map(JsonValue::as_object)
        {
            let Some(&idx) = key_of(doc, self.key_field).and_then(|key| desired.get(&key)) else {
                continue;
            };
            if used[idx] {
                continue;
            }
            used[idx] = true;
            result.push(JsonValue::Object(merge(doc, &self.entries[idx].value)));
        }

        let empty = Document::new();
        for (entry, _) in self.entries.iter().zip(used).filter(|(_, used)| !used) {
            result.push(JsonValue::Object(merge(&empty, &entry.value)));
        }
        result
    }
}

fn key_of(doc: &Document, key_field: &str) -> Option<Key> {
    doc.get(key_field).and_then(JsonValue::as_i64)
}
