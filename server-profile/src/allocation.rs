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

//! Hardware allocation for new profiles.
//!
//! Between the available-targets query and profile creation another client
//! may take the selected hardware. The appliance reports it with an
//! allocation conflict error; creation is retried with a freshly selected
//! target after a fixed backoff, up to the configured number of attempts.
//!
//! ```text
//! Resolve -> Attempt -> Classify -> Done
//!    ^                     |
//!    +----- Backoff <------+ (conflict, attempts left)
//! ```

use crate::config::ReconcilerConfig;
use crate::profile;
use crate::Error;
use oneview_core::Document;
use oneview_core::OneView;
use oneview_core::RemoteError;
use oneview_core::ResourceUri;
use oneview_core::TargetConstraints;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Classification of a failed creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Selected hardware was taken concurrently.
    AllocationConflict,
    /// Anything else.
    Other,
}

impl FailureClass {
    #[must_use]
    pub fn of<E: RemoteError>(config: &ReconcilerConfig, err: &E) -> Self {
        match err.error_code() {
            Some(code) if config.is_allocation_conflict(code) => Self::AllocationConflict,
            _ => Self::Other,
        }
    }
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Retry,
    Exhausted,
    Fail,
}

impl Decision {
    /// Decide after `attempts` attempts (including the failed one).
    #[must_use]
    pub const fn after(class: FailureClass, attempts: u32, max_attempts: u32) -> Self {
        match class {
            FailureClass::Other => Self::Fail,
            FailureClass::AllocationConflict if attempts >= max_attempts => Self::Exhausted,
            FailureClass::AllocationConflict => Self::Retry,
        }
    }
}

enum AllocationStep<E> {
    Resolve,
    Attempt(Option<ResourceUri>),
    Classify(Result<Document, E>),
    Backoff(E),
}

/// Creation of a single profile with hardware allocation retries.
pub struct Allocation<'a, C: OneView> {
    client: &'a C,
    config: &'a ReconcilerConfig,
    profile: Document,
    pinned: Option<ResourceUri>,
    attempts: u32,
}

impl<'a, C: OneView> Allocation<'a, C> {
    /// Hardware already bound in `document` (`serverHardwareUri`) is used
    /// for every attempt; otherwise a target is selected before each one.
    pub fn new(client: &'a C, config: &'a ReconcilerConfig, document: Document) -> Self {
        let pinned = ResourceUri::from_field(&document, profile::SERVER_HARDWARE_URI);
        Self {
            client,
            config,
            profile: document,
            pinned,
            attempts: 0,
        }
    }

    /// Number of creation attempts made so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Run allocation until profile is created or attempts are exhausted.
    ///
    /// # Errors
    ///
    /// - `Error::AllocationExhausted` if every attempt failed with
    ///   allocation conflict
    /// - `Error::Remote` on any other failure, without retry
    pub async fn run(&mut self) -> Result<Document, Error<C>> {
        let mut step = AllocationStep::Resolve;
        loop {
            step = match step {
                AllocationStep::Resolve => AllocationStep::Attempt(self.resolve().await?),
                AllocationStep::Attempt(hardware) => {
                    self.attempts += 1;
                    let document = self.document(hardware);
                    AllocationStep::Classify(self.client.create(&document).await)
                }
                AllocationStep::Classify(Ok(created)) => {
                    info!(attempts = self.attempts, "server profile created");
                    return Ok(created);
                }
                AllocationStep::Classify(Err(err)) => {
                    let class = FailureClass::of(self.config, &err);
                    match Decision::after(class, self.attempts, self.config.max_allocation_attempts)
                    {
                        Decision::Retry => AllocationStep::Backoff(err),
                        Decision::Exhausted => {
                            return Err(Error::AllocationExhausted {
                                attempts: self.attempts,
                                last: err,
                            })
                        }
                        Decision::Fail => return Err(Error::Remote(err)),
                    }
                }
                AllocationStep::Backoff(err) => {
                    warn!(
                        attempt = self.attempts,
                        max_attempts = self.config.max_allocation_attempts,
                        error = %err,
                        "server hardware allocation conflict, retrying"
                    );
                    tokio::time::sleep(self.config.allocation_backoff()).await;
                    AllocationStep::Resolve
                }
            };
        }
    }

    async fn resolve(&self) -> Result<Option<ResourceUri>, Error<C>> {
        if let Some(pinned) = &self.pinned {
            return Ok(Some(pinned.clone()));
        }
        let constraints = TargetConstraints::of(&self.profile);
        let targets = self
            .client
            .available_targets(&constraints)
            .await
            .map_err(Error::Remote)?;
        let hardware = targets.first_hardware();
        match &hardware {
            Some(uri) => debug!(hardware = %uri, "selected available target"),
            None => debug!("no available target, creating profile without hardware"),
        }
        Ok(hardware)
    }

    fn document(&self, hardware: Option<ResourceUri>) -> Document {
        let mut document = self.profile.clone();
        if let Some(uri) = hardware {
            document.insert(
                profile::SERVER_HARDWARE_URI.into(),
                uri.as_str().to_string().into(),
            );
        }
        document
    }
}
