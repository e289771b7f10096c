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

use crate::JsonValue;
use serde::Deserialize;
use serde::Serialize;

/// Changes the appliance would apply to bring a profile in compliance with
/// its template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePreview {
    /// Changes can be applied while the hardware is powered on.
    #[serde(default)]
    pub is_online_update: bool,
    #[serde(default)]
    pub automatic_updates: Vec<JsonValue>,
    #[serde(default)]
    pub manual_updates: Vec<JsonValue>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub preview_type: Option<String>,
}
