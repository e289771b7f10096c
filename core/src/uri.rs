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

//! Resource identifiers
//!
//! - [`ResourceUri`]: value of the `uri` field of an appliance resource, for
//!   example `/rest/server-profiles/94B55683-173F-4B36-8FA6-EC250BA2328B`.
//! - [`ResourceKind`]: collection a resource belongs to. Used for lookups by
//!   name.
//!
//! These types are semantic-unaware; they do not validate content.
//!
//! Example
//! ```rust
//! use oneview_core::ResourceUri;
//!
//! let uri = ResourceUri::from("/rest/server-hardware/1".to_string());
//! assert_eq!(uri.to_string(), "/rest/server-hardware/1");
//! ```

use crate::Document;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

/// Name of the field that holds resource URI in documents.
pub const URI_FIELD: &str = "uri";

/// Type for the `uri` of the resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    /// URI stored in the `field` of the document. Empty strings and
    /// non-string values are treated as absent.
    #[must_use]
    pub fn from_field(doc: &Document, field: &str) -> Option<Self> {
        doc.get(field)
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.into()))
    }

    /// URI of the document itself.
    #[must_use]
    pub fn of(doc: &Document) -> Option<Self> {
        Self::from_field(doc, URI_FIELD)
    }

    /// String representation of the URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ResourceUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Collection of appliance resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Server profiles (`/rest/server-profiles`).
    ServerProfile,
    /// Server profile templates (`/rest/server-profile-templates`).
    ServerProfileTemplate,
    /// Server hardware (`/rest/server-hardware`).
    ServerHardware,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ServerProfile => write!(f, "Server Profile"),
            Self::ServerProfileTemplate => write!(f, "Server Profile Template"),
            Self::ServerHardware => write!(f, "Server Hardware"),
        }
    }
}
