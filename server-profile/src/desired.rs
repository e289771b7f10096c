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

//! Validated desired profile data.

use crate::field::Field;
use crate::keyed::KeyedList;
use crate::profile;
use crate::InvalidInput;
use oneview_core::Document;
use oneview_core::JsonValue;

/// Desired profile data, split into identity-merged collections and
/// plain fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredProfile {
    name: String,
    server_template: Option<String>,
    server_hardware: Option<String>,
    pub(crate) fields: Document,
    pub(crate) connections: Field<KeyedList<Document>>,
    pub(crate) san_storage: Field<DesiredSanStorage>,
}

/// Desired `sanStorage` sub-document.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredSanStorage {
    pub(crate) fields: Document,
    pub(crate) volume_attachments: Field<KeyedList<DesiredVolumeAttachment>>,
}

/// Desired entry of `sanStorage.volumeAttachments`.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredVolumeAttachment {
    pub(crate) fields: Document,
    pub(crate) storage_paths: Field<KeyedList<Document>>,
}

impl DesiredProfile {
    /// Validate desired data.
    ///
    /// Module-level keys (`server_template`, `server_hardware`) are taken
    /// out of the data: they reference other resources by name and are
    /// never sent to the appliance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `name` is not informed, module-level keys
    /// are not strings, or identity-merged collections are malformed.
    pub fn parse(mut data: Document) -> Result<Self, InvalidInput> {
        let name = required_name(&data)?.to_string();
        let server_template = take_name(&mut data, profile::SERVER_TEMPLATE)?;
        let server_hardware = take_name(&mut data, profile::SERVER_HARDWARE)?;
        let connections = Field::take(&mut data, profile::CONNECTIONS).try_map(|v| {
            KeyedList::parse(profile::CONNECTIONS, profile::CONNECTION_ID, v, |_, doc| {
                Ok(doc)
            })
        })?;
        let san_storage = Field::take(&mut data, profile::SAN_STORAGE)
            .try_map(|v| DesiredSanStorage::parse(profile::SAN_STORAGE, v))?;
        Ok(Self {
            name,
            server_template,
            server_hardware,
            fields: data,
            connections,
            san_storage,
        })
    }

    /// Name of the profile.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the template to create profile from.
    #[must_use]
    pub fn server_template(&self) -> Option<&str> {
        self.server_template.as_deref()
    }

    /// Name of the hardware to assign profile to.
    #[must_use]
    pub fn server_hardware(&self) -> Option<&str> {
        self.server_hardware.as_deref()
    }

    /// Value of a plain field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    /// Set a plain field. Used to bind resolved references.
    pub fn set_field(&mut self, key: &str, value: JsonValue) {
        self.fields.insert(key.into(), value);
    }
}

impl DesiredSanStorage {
    fn parse(path: &str, value: JsonValue) -> Result<Self, InvalidInput> {
        let JsonValue::Object(mut fields) = value else {
            return Err(InvalidInput::new(format!("{path} must be an object")));
        };
        let list_path = format!("{path}.{}", profile::VOLUME_ATTACHMENTS);
        let volume_attachments = Field::take(&mut fields, profile::VOLUME_ATTACHMENTS)
            .try_map(|v| {
                KeyedList::parse(&list_path, profile::VOLUME_ID, v, |entry_path, doc| {
                    DesiredVolumeAttachment::parse(entry_path, doc)
                })
            })?;
        Ok(Self {
            fields,
            volume_attachments,
        })
    }
}

impl DesiredVolumeAttachment {
    fn parse(path: &str, mut fields: Document) -> Result<Self, InvalidInput> {
        let list_path = format!("{path}.{}", profile::STORAGE_PATHS);
        let storage_paths = Field::take(&mut fields, profile::STORAGE_PATHS).try_map(|v| {
            KeyedList::parse(&list_path, profile::STORAGE_PATH_ID, v, |_, doc| Ok(doc))
        })?;
        Ok(Self {
            fields,
            storage_paths,
        })
    }
}

/// Name of the resource in data. Required by every state.
///
/// # Errors
///
/// Returns `InvalidInput` if `name` is absent, not a string or empty.
pub fn required_name(data: &Document) -> Result<&str, InvalidInput> {
    data.get(profile::NAME)
        .and_then(JsonValue::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InvalidInput::new("Mandatory field was not informed: data.name"))
}

fn take_name(data: &mut Document, key: &str) -> Result<Option<String>, InvalidInput> {
    match data.remove(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(v)) => Ok(Some(v)),
        Some(_) => Err(InvalidInput::new(format!("{key} must be a name"))),
    }
}
