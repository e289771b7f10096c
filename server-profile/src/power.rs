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

//! Power sequencing around profile mutations.

use crate::config::ReconcilerConfig;
use crate::profile;
use crate::Error;
use oneview_core::Document;
use oneview_core::OneView;
use oneview_core::PowerState;
use oneview_core::PowerStateRequest;
use oneview_core::ResourceUri;
use std::future::Future;
use tracing::debug;
use tracing::info;

/// How a mutation affects the hardware assigned to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Hardware must be off during the change and is powered back on
    /// afterwards if it was on.
    Offline,
    /// Change is applied to running hardware.
    Online,
    /// Profile is removed; hardware is left powered off.
    Removal,
}

impl ChangeKind {
    /// Kind of compliance remediation according to its preview.
    #[must_use]
    pub const fn remediation(is_online_update: bool) -> Self {
        if is_online_update {
            Self::Online
        } else {
            Self::Offline
        }
    }
}

/// Brackets mutations of a profile with power operations on its
/// hardware. Profiles without hardware are mutated without power calls.
pub struct PowerGuard<'a, C: OneView> {
    client: &'a C,
    config: &'a ReconcilerConfig,
    hardware: Option<ResourceUri>,
}

impl<'a, C: OneView> PowerGuard<'a, C> {
    pub fn new(client: &'a C, config: &'a ReconcilerConfig, server_profile: &Document) -> Self {
        Self {
            client,
            config,
            hardware: ResourceUri::from_field(server_profile, profile::SERVER_HARDWARE_URI),
        }
    }

    /// Run `mutation` with the hardware powered as required by `change`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Remote` if a power operation or the mutation fails.
    /// Mutation is not run if power off failed.
    pub async fn run<T, F, Fut>(&self, change: ChangeKind, mutation: F) -> Result<T, Error<C>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, C::Error>>,
    {
        let hardware = match (&self.hardware, change) {
            (Some(hardware), ChangeKind::Offline | ChangeKind::Removal) => hardware,
            _ => return mutation().await.map_err(Error::Remote),
        };
        let powered_off = self.power_off(hardware).await?;
        let result = mutation().await.map_err(Error::Remote)?;
        if change == ChangeKind::Offline && powered_off {
            self.power_on(hardware).await?;
        }
        Ok(result)
    }

    /// Returns `true` if power off was issued.
    async fn power_off(&self, hardware: &ResourceUri) -> Result<bool, Error<C>> {
        let state = self
            .client
            .get(hardware)
            .await
            .map(|hw| PowerState::of(&hw))
            .map_err(Error::Remote)?;
        if state == Some(PowerState::Off) {
            debug!(%hardware, "server hardware is already powered off");
            return Ok(false);
        }
        info!(%hardware, "powering off server hardware");
        self.client
            .update_power_state(&PowerStateRequest::off(self.config.power_off_control), hardware)
            .await
            .map_err(Error::Remote)?;
        Ok(true)
    }

    async fn power_on(&self, hardware: &ResourceUri) -> Result<(), Error<C>> {
        info!(%hardware, "powering on server hardware");
        self.client
            .update_power_state(&PowerStateRequest::on(self.config.power_on_control), hardware)
            .await
            .map(|_| ())
            .map_err(Error::Remote)
    }
}
