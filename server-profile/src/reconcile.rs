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

//! Reconciliation of a server profile with its desired state.
//!
//! Example
//! ```rust,no_run
//! # use oneview_core::{Document, OneView};
//! # use oneview_server_profile::{Error, Reconciler, ReconcilerConfig, State};
//! # use std::sync::Arc;
//! # async fn example<C: OneView>(client: Arc<C>, data: Document) -> Result<(), Error<C>> {
//! let reconciler = Reconciler::new(client, ReconcilerConfig::default());
//! let outcome = reconciler.reconcile(State::Present, data).await?;
//! println!("{} (changed: {})", outcome.message, outcome.changed);
//! # Ok(())
//! # }
//! ```

use crate::allocation::Allocation;
use crate::compare::has_changes;
use crate::config::ReconcilerConfig;
use crate::desired::required_name;
use crate::desired::DesiredProfile;
use crate::facts::Facts;
use crate::merge::merge;
use crate::power::ChangeKind;
use crate::power::PowerGuard;
use crate::profile;
use crate::Error;
use crate::Message;
use oneview_core::Document;
use oneview_core::JsonValue;
use oneview_core::OneView;
use oneview_core::PatchOperation;
use oneview_core::ResourceKind;
use oneview_core::ResourceUri;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use tracing::info;

/// Desired state of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Profile exists and matches desired data.
    Present,
    /// Profile does not exist.
    Absent,
    /// Profile is compliant with its template.
    Compliant,
}

/// Result of a successful reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    pub changed: bool,
    pub message: Message,
    /// Not reported for `absent` state.
    pub facts: Option<Facts>,
}

impl ReconcileOutcome {
    fn new(message: Message, facts: Option<Facts>) -> Self {
        Self {
            changed: message.changed(),
            message,
            facts,
        }
    }
}

/// Server profile reconciler.
pub struct Reconciler<C: OneView> {
    client: Arc<C>,
    config: ReconcilerConfig,
}

impl<C: OneView> Reconciler<C> {
    pub fn new(client: Arc<C>, config: ReconcilerConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Bring the profile named in `data` to `state`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidInput` if data is malformed; nothing is called
    /// - `Error::NotFound` if referenced template or hardware (or profile
    ///   for `compliant` state) does not exist
    /// - `Error::ComplianceNotSupported` if profile has no template
    /// - `Error::AllocationExhausted` if hardware could not be allocated
    /// - `Error::Remote` on any other appliance failure
    pub async fn reconcile(
        &self,
        state: State,
        data: Document,
    ) -> Result<ReconcileOutcome, Error<C>> {
        match state {
            State::Present => self.present(DesiredProfile::parse(data)?).await,
            State::Absent => self.absent(required_name(&data)?).await,
            State::Compliant => self.compliant(required_name(&data)?).await,
        }
    }

    async fn present(&self, mut desired: DesiredProfile) -> Result<ReconcileOutcome, Error<C>> {
        let current = self.find(ResourceKind::ServerProfile, desired.name()).await?;
        let template = self.resolve_template(&mut desired).await?;
        self.resolve_hardware(&mut desired).await?;
        match current {
            None => self.create(&desired, template).await,
            Some(current) => self.update(current, &desired).await,
        }
    }

    async fn create(
        &self,
        desired: &DesiredProfile,
        template: Option<ResourceUri>,
    ) -> Result<ReconcileOutcome, Error<C>> {
        let base = match &template {
            Some(uri) => self.client.new_profile(uri).await.map_err(Error::Remote)?,
            None => Document::new(),
        };
        let document = merge(&base, desired);
        info!(profile = desired.name(), "creating server profile");
        let created = Allocation::new(self.client(), &self.config, document)
            .run()
            .await?;
        let facts = Facts::gather(self.client(), created, true).await?;
        Ok(ReconcileOutcome::new(Message::Created, Some(facts)))
    }

    async fn update(
        &self,
        current: Document,
        desired: &DesiredProfile,
    ) -> Result<ReconcileOutcome, Error<C>> {
        let merged = merge(&current, desired);
        if !has_changes(&current, &merged) {
            debug!(profile = desired.name(), "server profile is up to date");
            let facts = Facts::gather(self.client(), current, false).await?;
            return Ok(ReconcileOutcome::new(Message::AlreadyUpdated, Some(facts)));
        }
        let uri = profile_uri(&current)?;
        info!(profile = desired.name(), %uri, "updating server profile");
        let updated = PowerGuard::new(self.client(), &self.config, &current)
            .run(ChangeKind::Offline, || self.client.update(&merged, &uri))
            .await?;
        let facts = Facts::gather(self.client(), updated, false).await?;
        Ok(ReconcileOutcome::new(Message::Updated, Some(facts)))
    }

    async fn absent(&self, name: &str) -> Result<ReconcileOutcome, Error<C>> {
        let Some(current) = self.find(ResourceKind::ServerProfile, name).await? else {
            return Ok(ReconcileOutcome::new(Message::AlreadyAbsent, None));
        };
        info!(profile = name, "deleting server profile");
        PowerGuard::new(self.client(), &self.config, &current)
            .run(ChangeKind::Removal, || self.client.delete(&current))
            .await?;
        Ok(ReconcileOutcome::new(Message::Deleted, None))
    }

    async fn compliant(&self, name: &str) -> Result<ReconcileOutcome, Error<C>> {
        let current = self
            .find_required(ResourceKind::ServerProfile, name)
            .await?;
        if ResourceUri::from_field(&current, profile::SERVER_PROFILE_TEMPLATE_URI).is_none() {
            return Err(Error::ComplianceNotSupported(name.into()));
        }
        if current.get(profile::TEMPLATE_COMPLIANCE).and_then(JsonValue::as_str)
            == Some(profile::COMPLIANT)
        {
            let facts = Facts::gather(self.client(), current, false).await?;
            return Ok(ReconcileOutcome::new(Message::AlreadyCompliant, Some(facts)));
        }
        let uri = profile_uri(&current)?;
        let preview = self
            .client
            .compliance_preview(&uri)
            .await
            .map_err(Error::Remote)?;
        let change = ChangeKind::remediation(preview.is_online_update);
        info!(profile = name, %uri, ?change, "remediating template compliance");
        let patched = PowerGuard::new(self.client(), &self.config, &current)
            .run(change, || {
                self.client.patch(
                    &uri,
                    PatchOperation::Replace,
                    profile::TEMPLATE_COMPLIANCE_PATH,
                    profile::COMPLIANT.into(),
                )
            })
            .await?;
        let facts = Facts::gather(self.client(), patched, false).await?;
        Ok(ReconcileOutcome::new(Message::Remediated, Some(facts)))
    }

    async fn find(&self, kind: ResourceKind, name: &str) -> Result<Option<Document>, Error<C>> {
        self.client
            .get_by_name(kind, name)
            .await
            .map_err(Error::Remote)
    }

    async fn find_required(&self, kind: ResourceKind, name: &str) -> Result<Document, Error<C>> {
        self.find(kind, name).await?.ok_or_else(|| Error::NotFound {
            kind,
            name: name.into(),
        })
    }

    /// Template to create profile from. Template referenced by name is
    /// bound to the desired data.
    async fn resolve_template(
        &self,
        desired: &mut DesiredProfile,
    ) -> Result<Option<ResourceUri>, Error<C>> {
        let Some(name) = desired.server_template().map(str::to_string) else {
            return Ok(desired
                .field(profile::SERVER_PROFILE_TEMPLATE_URI)
                .and_then(JsonValue::as_str)
                .filter(|uri| !uri.is_empty())
                .map(ResourceUri::from));
        };
        let kind = ResourceKind::ServerProfileTemplate;
        let template = self.find_required(kind, &name).await?;
        let uri = ResourceUri::of(&template).ok_or(Error::InvalidResource {
            kind,
            field: oneview_core::uri::URI_FIELD,
        })?;
        debug!(template = %name, %uri, "resolved server profile template");
        desired.set_field(profile::SERVER_PROFILE_TEMPLATE_URI, uri.as_str().into());
        Ok(Some(uri))
    }

    async fn resolve_hardware(&self, desired: &mut DesiredProfile) -> Result<(), Error<C>> {
        let Some(name) = desired.server_hardware().map(str::to_string) else {
            return Ok(());
        };
        let kind = ResourceKind::ServerHardware;
        let hardware = self.find_required(kind, &name).await?;
        let uri = ResourceUri::of(&hardware).ok_or(Error::InvalidResource {
            kind,
            field: oneview_core::uri::URI_FIELD,
        })?;
        debug!(hardware = %name, %uri, "resolved server hardware");
        desired.set_field(profile::SERVER_HARDWARE_URI, uri.as_str().into());
        Ok(())
    }
}

fn profile_uri<C: OneView>(server_profile: &Document) -> Result<ResourceUri, Error<C>> {
    ResourceUri::of(server_profile).ok_or(Error::InvalidResource {
        kind: ResourceKind::ServerProfile,
        field: oneview_core::uri::URI_FIELD,
    })
}
