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

//! Field names of the server profile document.

pub const NAME: &str = "name";
pub const SERIAL_NUMBER: &str = "serialNumber";
pub const SERVER_HARDWARE_URI: &str = "serverHardwareUri";
pub const SERVER_PROFILE_TEMPLATE_URI: &str = "serverProfileTemplateUri";
pub const TEMPLATE_COMPLIANCE: &str = "templateCompliance";

pub const CONNECTIONS: &str = "connections";
pub const CONNECTION_ID: &str = "id";

pub const SAN_STORAGE: &str = "sanStorage";
pub const MANAGE_SAN_STORAGE: &str = "manageSanStorage";
pub const VOLUME_ATTACHMENTS: &str = "volumeAttachments";
pub const VOLUME_ID: &str = "id";
pub const STORAGE_PATHS: &str = "storagePaths";
pub const STORAGE_PATH_ID: &str = "connectionId";

/// Template name. Never sent to the appliance.
pub const SERVER_TEMPLATE: &str = "server_template";
/// Hardware name. Never sent to the appliance.
pub const SERVER_HARDWARE: &str = "server_hardware";

/// Value of `templateCompliance` for a compliant profile.
pub const COMPLIANT: &str = "Compliant";
/// Patch path used to remediate template compliance.
pub const TEMPLATE_COMPLIANCE_PATH: &str = "/templateCompliance";
