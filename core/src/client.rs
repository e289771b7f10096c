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

//! OneView appliance client abstraction
//!
//! This module defines the transport-agnostic [`OneView`] trait, the
//! capability set the reconciler needs from an appliance client.
//! Implementors provide asynchronous operations to look resources up, create,
//! update, patch and delete server profiles, list available targets, preview
//! template compliance and change hardware power state.
//!
//! Key concepts:
//! - Resource identity: every persisted resource carries a `uri`
//!   ([`crate::ResourceUri`]).
//! - Documents: profiles, templates and hardware are exchanged as JSON
//!   [`crate::Document`]s. The appliance echoes the persisted document back
//!   from every mutating call.
//! - Failure classification: client errors implement [`RemoteError`] so that
//!   callers can tell transient allocation conflicts from terminal failures
//!   without knowing the transport.
//!
//! Operation semantics:
//! - `get_by_name` returns `None` when nothing matches the name.
//! - `get` fetches the resource at the given URI.
//! - `new_profile` returns a new, unsaved profile document built from a
//!   template.
//! - `create` persists a new profile. It completes only when the appliance
//!   task completes, so device-bay contention is reported by this call.
//! - `update` replaces the profile at `uri` with the document.
//! - `patch` applies a single-field operation.
//! - `delete` removes the profile.
//! - `available_targets` lists hardware bays a new profile may be assigned
//!   to, in the appliance's order.
//! - `update_power_state` changes hardware power state and waits for it.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures.
//! - Errors should implement `std::error::Error` and be safely transferable
//!   across threads.

use crate::AvailableTargets;
use crate::CompliancePreview;
use crate::Document;
use crate::JsonValue;
use crate::PatchOperation;
use crate::PowerStateRequest;
use crate::ResourceKind;
use crate::ResourceUri;
use crate::TargetConstraints;
use std::error::Error as StdError;
use std::future::Future;

/// Error returned by an appliance client.
pub trait RemoteError: StdError + Send + Sync {
    /// Appliance error code of the failed task or request, if any
    /// (for example `AssignProfileToDeviceBayError`).
    fn error_code(&self) -> Option<&str>;
}

/// `OneView` trait defines access to the appliance resources used for
/// server profile reconciliation.
pub trait OneView: Send + Sync {
    /// Client error.
    type Error: RemoteError;

    /// Find resource of `kind` by its name.
    fn get_by_name(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> impl Future<Output = Result<Option<Document>, Self::Error>> + Send;

    /// Get resource by its URI.
    fn get(&self, uri: &ResourceUri) -> impl Future<Output = Result<Document, Self::Error>> + Send;

    /// Build new (not persisted) profile document from the template.
    fn new_profile(
        &self,
        template: &ResourceUri,
    ) -> impl Future<Output = Result<Document, Self::Error>> + Send;

    /// Create server profile.
    fn create(&self, profile: &Document)
        -> impl Future<Output = Result<Document, Self::Error>> + Send;

    /// Update server profile identified by `uri`.
    fn update(
        &self,
        profile: &Document,
        uri: &ResourceUri,
    ) -> impl Future<Output = Result<Document, Self::Error>> + Send;

    /// Apply single-field patch to the profile identified by `uri`.
    fn patch(
        &self,
        uri: &ResourceUri,
        op: PatchOperation,
        path: &str,
        value: JsonValue,
    ) -> impl Future<Output = Result<Document, Self::Error>> + Send;

    /// Delete server profile.
    fn delete(&self, profile: &Document) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Hardware bays available for new profile with given constraints.
    fn available_targets(
        &self,
        constraints: &TargetConstraints,
    ) -> impl Future<Output = Result<AvailableTargets, Self::Error>> + Send;

    /// Preview of changes required to bring profile to template compliance.
    fn compliance_preview(
        &self,
        uri: &ResourceUri,
    ) -> impl Future<Output = Result<CompliancePreview, Self::Error>> + Send;

    /// Change power state of server hardware identified by `hardware`.
    fn update_power_state(
        &self,
        request: &PowerStateRequest,
        hardware: &ResourceUri,
    ) -> impl Future<Output = Result<Document, Self::Error>> + Send;
}
