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

//! Reconciler configuration.
//!
//! Example of the configuration file (all keys are optional):
//! ```toml
//! max-allocation-attempts = 25
//! allocation-backoff-ms = 5000
//! allocation-conflict-codes = ["AssignProfileToDeviceBayError"]
//! power-off-control = "PressAndHold"
//! power-on-control = "MomentaryPress"
//! ```

use oneview_core::PowerControl;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use std::time::Duration;
use toml::de::Error as TomlError;

/// Error code reported by the appliance when selected hardware was taken
/// by another profile between target query and profile creation.
pub const ASSIGN_PROFILE_TO_DEVICE_BAY_ERROR: &str = "AssignProfileToDeviceBayError";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ReconcilerConfig {
    /// Maximum number of profile creation attempts when hardware
    /// allocation conflicts.
    pub max_allocation_attempts: u32,
    /// Delay between creation attempts, milliseconds.
    pub allocation_backoff_ms: u64,
    /// Error codes classified as hardware allocation conflict.
    pub allocation_conflict_codes: Vec<String>,
    pub power_off_control: PowerControl,
    pub power_on_control: PowerControl,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            max_allocation_attempts: 25,
            allocation_backoff_ms: 5000,
            allocation_conflict_codes: vec![ASSIGN_PROFILE_TO_DEVICE_BAY_ERROR.into()],
            power_off_control: PowerControl::PressAndHold,
            power_on_control: PowerControl::MomentaryPress,
        }
    }
}

impl ReconcilerConfig {
    /// Read configuration from toml file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if failed to read file
    /// - `ConfigError::Toml` if failed to parse content as TOML
    /// - `ConfigError::Invalid` if parsed configuration is not valid
    pub fn read(fname: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut file = File::open(fname).map_err(ConfigError::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read`] except `ConfigError::Io`.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_allocation_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max-allocation-attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn allocation_backoff(&self) -> Duration {
        Duration::from_millis(self.allocation_backoff_ms)
    }

    /// Error code means hardware allocation conflict.
    #[must_use]
    pub fn is_allocation_conflict(&self, code: &str) -> bool {
        self.allocation_conflict_codes.iter().any(|c| c == code)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(IoError),
    Toml(TomlError),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "failed to read configuration: {err}"),
            Self::Toml(err) => write!(f, "failed to parse configuration: {err}"),
            Self::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
