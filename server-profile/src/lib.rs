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

//! Server profile reconciliation.
//!
//! Given desired profile data and a desired [`State`], [`Reconciler`]
//! looks the profile up through a [`oneview_core::OneView`] client and
//! issues the calls required to reach the state:
//!
//! - `present`: create the profile (allocating hardware, with retries on
//!   allocation conflicts) or update it with desired data deep-merged into
//!   the current profile;
//! - `absent`: delete the profile;
//! - `compliant`: bring the profile to compliance with its template.
//!
//! Changes that require the hardware to be off are bracketed with power
//! operations.

pub mod allocation;
pub mod compare;
pub mod config;
pub mod desired;
/// Facts about reconciled profile.
pub mod facts;
pub mod field;
pub mod keyed;
pub mod merge;
/// Reconciliation messages.
pub mod message;
pub mod power;
pub mod profile;
pub mod reconcile;

mod error;

#[doc(inline)]
pub use config::ConfigError;
#[doc(inline)]
pub use config::ReconcilerConfig;
#[doc(inline)]
pub use desired::DesiredProfile;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use error::InvalidInput;
#[doc(inline)]
pub use facts::Facts;
#[doc(inline)]
pub use field::Field;
#[doc(inline)]
pub use message::Message;
#[doc(inline)]
pub use reconcile::ReconcileOutcome;
#[doc(inline)]
pub use reconcile::Reconciler;
#[doc(inline)]
pub use reconcile::State;
