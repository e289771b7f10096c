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

//! Core types for OneView server profile reconciliation.
//!
//! This crate contains the transport-agnostic [`OneView`] client trait and
//! the small set of typed payloads exchanged with the appliance. Profile,
//! template and hardware resources themselves are kept as JSON
//! [`Document`]s: the reconciler works on their structure, not on a fixed
//! schema.

/// Appliance client abstraction.
pub mod client;
/// Compliance preview payload.
pub mod compliance;
/// Power state requests.
pub mod power;
/// Available targets for profile assignment.
pub mod target;
/// Resource identifiers.
pub mod uri;

#[doc(inline)]
pub use client::OneView;
#[doc(inline)]
pub use client::RemoteError;
#[doc(inline)]
pub use compliance::CompliancePreview;
#[doc(inline)]
pub use power::PowerControl;
#[doc(inline)]
pub use power::PowerState;
#[doc(inline)]
pub use power::PowerStateRequest;
#[doc(inline)]
pub use target::AvailableTarget;
#[doc(inline)]
pub use target::AvailableTargets;
#[doc(inline)]
pub use target::TargetConstraints;
#[doc(inline)]
pub use uri::ResourceKind;
#[doc(inline)]
pub use uri::ResourceUri;

use serde::Deserialize;
use serde::Serialize;

/// Resource document as returned and accepted by the appliance.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// JSON value used inside documents.
pub type JsonValue = serde_json::Value;

/// Operation of a single-field patch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    /// Replace value at the path.
    Replace,
}

impl std::fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
        }
    }
}
