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
use serde::Deserialize;
use serde::Serialize;

/// Name of the hardware document field with current power state.
pub const POWER_STATE_FIELD: &str = "powerState";

/// Power state of the server hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    Resetting,
    #[serde(other)]
    Unknown,
}

impl PowerState {
    /// Power state reported in the hardware document. `None` if the
    /// document does not report it.
    #[must_use]
    pub fn of(hardware: &Document) -> Option<Self> {
        hardware
            .get(POWER_STATE_FIELD)
            .and_then(|v| Self::deserialize(v).ok())
    }
}

/// How power state change is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerControl {
    /// Momentary press of the power button.
    MomentaryPress,
    /// Press and hold of the power button (hard power off).
    PressAndHold,
    /// Cold boot.
    ColdBoot,
    /// Reset.
    Reset,
}

/// Power state change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerStateRequest {
    pub power_state: PowerState,
    pub power_control: PowerControl,
}

impl PowerStateRequest {
    /// Power off request.
    #[must_use]
    pub const fn off(power_control: PowerControl) -> Self {
        Self {
            power_state: PowerState::Off,
            power_control,
        }
    }

    /// Power on request.
    #[must_use]
    pub const fn on(power_control: PowerControl) -> Self {
        Self {
            power_state: PowerState::On,
            power_control,
        }
    }
}
