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

use crate::profile;
use crate::Error;
use oneview_core::CompliancePreview;
use oneview_core::Document;
use oneview_core::JsonValue;
use oneview_core::OneView;
use oneview_core::ResourceUri;
use serde::Serialize;

/// Facts about the reconciled profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facts {
    pub serial_number: Option<JsonValue>,
    pub server_profile: Document,
    /// Hardware assigned to the profile.
    pub server_hardware: Option<Document>,
    /// Template compliance preview. Only for profiles created from a
    /// template.
    pub compliance_preview: Option<CompliancePreview>,
    /// Profile was created by this reconciliation.
    pub created: bool,
}

impl Facts {
    /// Collect facts about persisted `server_profile`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if hardware or compliance preview cannot be
    /// retrieved.
    pub async fn gather<C: OneView>(
        client: &C,
        server_profile: Document,
        created: bool,
    ) -> Result<Self, Error<C>> {
        let hardware = ResourceUri::from_field(&server_profile, profile::SERVER_HARDWARE_URI);
        let server_hardware = match hardware {
            Some(uri) => Some(client.get(&uri).await.map_err(Error::Remote)?),
            None => None,
        };
        let from_template =
            ResourceUri::from_field(&server_profile, profile::SERVER_PROFILE_TEMPLATE_URI)
                .is_some();
        let compliance_preview = match ResourceUri::of(&server_profile) {
            Some(uri) if from_template => {
                Some(client.compliance_preview(&uri).await.map_err(Error::Remote)?)
            }
            _ => None,
        };
        Ok(Self {
            serial_number: server_profile.get(profile::SERIAL_NUMBER).cloned(),
            server_profile,
            server_hardware,
            compliance_preview,
            created,
        })
    }
}
