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

use crate::Document;
use crate::ResourceUri;
use serde::Deserialize;
use serde::Serialize;

/// Constraints for available targets query. Taken from the profile
/// document that is going to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosure_group_uri: Option<ResourceUri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_hardware_type_uri: Option<ResourceUri>,
}

impl TargetConstraints {
    /// Constraints of the profile document.
    #[must_use]
    pub fn of(profile: &Document) -> Self {
        Self {
            enclosure_group_uri: ResourceUri::from_field(profile, "enclosureGroupUri"),
            server_hardware_type_uri: ResourceUri::from_field(profile, "serverHardwareTypeUri"),
        }
    }
}

/// Single available target (device bay).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTarget {
    #[serde(default)]
    pub enclosure_bay: Option<u32>,
    #[serde(default)]
    pub server_hardware_uri: Option<String>,
}

impl AvailableTarget {
    /// Hardware in the bay. Empty bays have no hardware.
    #[must_use]
    pub fn hardware(&self) -> Option<ResourceUri> {
        self.server_hardware_uri
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(ResourceUri::from)
    }
}

/// Response of available targets query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTargets {
    #[serde(default)]
    pub targets: Vec<AvailableTarget>,
}

impl AvailableTargets {
    /// First target with hardware in appliance's order.
    #[must_use]
    pub fn first_hardware(&self) -> Option<ResourceUri> {
        self.targets.iter().find_map(AvailableTarget::hardware)
    }
}
