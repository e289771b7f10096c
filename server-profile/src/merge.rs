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

//! Deep merge of desired profile data into the current profile.
//!
//! Result starts from the current document. Desired objects are merged
//! recursively, anything else replaces the current value. Identity-keyed
//! collections (`connections`, `sanStorage.volumeAttachments` and their
//! `storagePaths`) are joined by key, see [`crate::keyed`].
//!
//! Explicit `null` for a keyed collection means empty list. Explicit `null`
//! for `sanStorage` means "no SAN management": if the current profile has
//! SAN storage it is replaced with an empty unmanaged one.

use crate::desired::DesiredProfile;
use crate::desired::DesiredSanStorage;
use crate::desired::DesiredVolumeAttachment;
use crate::field::Field;
use crate::keyed::KeyedList;
use crate::profile;
use oneview_core::Document;
use oneview_core::JsonValue;

/// Merge desired profile into `current`. Merge is idempotent: merging
/// the same desired data into the result yields the result.
#[must_use]
pub fn merge(current: &Document, desired: &DesiredProfile) -> Document {
    let mut result = current.clone();
    overlay(&mut result, &desired.fields);
    merge_list(&mut result, profile::CONNECTIONS, &desired.connections, |cur, d| {
        merge_documents(cur, d)
    });
    match &desired.san_storage {
        Field::Absent => {}
        Field::Null => {
            let san = if has_san_storage(current) {
                empty_san_storage()
            } else {
                JsonValue::Null
            };
            result.insert(profile::SAN_STORAGE.into(), san);
        }
        Field::Value(san) => {
            let current_san = current
                .get(profile::SAN_STORAGE)
                .and_then(JsonValue::as_object);
            let merged = merge_san_storage(current_san.unwrap_or(&Document::new()), san);
            result.insert(profile::SAN_STORAGE.into(), JsonValue::Object(merged));
        }
    }
    result
}

/// Recursive merge of two documents. Desired wins on conflicts.
#[must_use]
pub fn merge_documents(current: &Document, desired: &Document) -> Document {
    let mut result = current.clone();
    overlay(&mut result, desired);
    result
}

fn overlay(target: &mut Document, desired: &Document) {
    for (key, value) in desired {
        match (target.get_mut(key), value) {
            (Some(JsonValue::Object(target)), JsonValue::Object(value)) => overlay(target, value),
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_list<T, F>(target: &mut Document, key: &str, desired: &Field<KeyedList<T>>, merge: F)
where
    F: Fn(&Document, &T) -> Document,
{
    let list = match desired {
        Field::Absent => return,
        Field::Null => Vec::new(),
        Field::Value(list) => list.join(target.get(key), merge),
    };
    target.insert(key.into(), JsonValue::Array(list));
}

fn merge_san_storage(current: &Document, desired: &DesiredSanStorage) -> Document {
    let mut result = merge_documents(current, &desired.fields);
    merge_list(
        &mut result,
        profile::VOLUME_ATTACHMENTS,
        &desired.volume_attachments,
        merge_volume_attachment,
    );
    result
}

fn merge_volume_attachment(current: &Document, desired: &DesiredVolumeAttachment) -> Document {
    let mut result = merge_documents(current, &desired.fields);
    merge_list(
        &mut result,
        profile::STORAGE_PATHS,
        &desired.storage_paths,
        merge_documents,
    );
    result
}

fn has_san_storage(doc: &Document) -> bool {
    doc.get(profile::SAN_STORAGE)
        .and_then(JsonValue::as_object)
        .is_some_and(|san| !san.is_empty())
}

fn empty_san_storage() -> JsonValue {
    let mut san = Document::new();
    san.insert(profile::MANAGE_SAN_STORAGE.into(), JsonValue::Bool(false));
    san.insert(profile::VOLUME_ATTACHMENTS.into(), JsonValue::Array(Vec::new()));
    JsonValue::Object(san)
}
