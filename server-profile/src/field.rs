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

//! Three-valued desired field.
//!
//! Desired data distinguishes a field that is not mentioned at all from a
//! field explicitly set to `null`: the first leaves the current value
//! alone, the second resets it. This is the same distinction as
//! `Option<Option<T>>` for optional nullable properties, with names that
//! read better at match sites.

use oneview_core::Document;
use oneview_core::JsonValue;

/// Value of a field in desired data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
    /// Field is not mentioned.
    #[default]
    Absent,
    /// Field is explicitly `null`.
    Null,
    /// Field has a value.
    Value(T),
}

impl<T> Field<T> {
    /// Apply fallible conversion to the value, keeping `Absent` and `Null`.
    ///
    /// # Errors
    ///
    /// Returns error of the conversion.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Field<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)?),
        })
    }
}

impl<T> From<Option<Option<T>>> for Field<T> {
    fn from(v: Option<Option<T>>) -> Self {
        match v {
            None => Self::Absent,
            Some(None) => Self::Null,
            Some(Some(v)) => Self::Value(v),
        }
    }
}

impl<T> From<Field<T>> for Option<Option<T>> {
    fn from(v: Field<T>) -> Self {
        match v {
            Field::Absent => None,
            Field::Null => Some(None),
            Field::Value(v) => Some(Some(v)),
        }
    }
}

impl Field<JsonValue> {
    /// Remove `key` from the document and classify what was there.
    pub fn take(doc: &mut Document, key: &str) -> Self {
        match doc.remove(key) {
            None => Self::Absent,
            Some(JsonValue::Null) => Self::Null,
            Some(v) => Self::Value(v),
        }
    }
}
