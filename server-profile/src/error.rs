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

use oneview_core::OneView;
use oneview_core::ResourceKind;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Malformed desired data. Detected before any call to the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput(String);

impl InvalidInput {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Human-readable description of the problem.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl StdError for InvalidInput {}

/// Reconciliation error.
pub enum Error<C: OneView> {
    /// Desired data is malformed.
    InvalidInput(InvalidInput),
    /// Informed resource reference does not resolve.
    NotFound { kind: ResourceKind, name: String },
    /// Profile is not associated with a template, so it cannot be
    /// brought to template compliance.
    ComplianceNotSupported(String),
    /// Every creation attempt failed with allocation conflict.
    AllocationExhausted { attempts: u32, last: C::Error },
    /// Appliance returned a resource without a field required for the
    /// operation.
    InvalidResource {
        kind: ResourceKind,
        field: &'static str,
    },
    /// Any other appliance failure.
    Remote(C::Error),
}

impl<C: OneView> From<InvalidInput> for Error<C> {
    fn from(err: InvalidInput) -> Self {
        Self::InvalidInput(err)
    }
}

impl<C: OneView> Display for Error<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::NotFound { kind, name } => write!(f, "Informed {kind} '{name}' not found"),
            Self::ComplianceNotSupported(name) => write!(
                f,
                "Server Profile '{name}' is not associated with a Server Profile Template; \
                 make compliant is not supported"
            ),
            Self::AllocationExhausted { attempts, last } => write!(
                f,
                "Could not allocate server hardware for the Server Profile after {attempts} \
                 attempts: {last}"
            ),
            Self::InvalidResource { kind, field } => {
                write!(f, "{kind} returned by the appliance has no '{field}'")
            }
            Self::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl<C: OneView> Debug for Error<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidInput(err) => f.debug_tuple("InvalidInput").field(err).finish(),
            Self::NotFound { kind, name } => f
                .debug_struct("NotFound")
                .field("kind", kind)
                .field("name", name)
                .finish(),
            Self::ComplianceNotSupported(name) => {
                f.debug_tuple("ComplianceNotSupported").field(name).finish()
            }
            Self::AllocationExhausted { attempts, last } => f
                .debug_struct("AllocationExhausted")
                .field("attempts", attempts)
                .field("last", last)
                .finish(),
            Self::InvalidResource { kind, field } => f
                .debug_struct("InvalidResource")
                .field("kind", kind)
                .field("field", field)
                .finish(),
            Self::Remote(err) => f.debug_tuple("Remote").field(err).finish(),
        }
    }
}

impl<C: OneView> StdError for Error<C>
where
    C::Error: 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::AllocationExhausted { last, .. } => Some(last),
            Self::Remote(err) => Some(err),
            _ => None,
        }
    }
}
