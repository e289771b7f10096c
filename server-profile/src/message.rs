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

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Result of a successful reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Created,
    Updated,
    AlreadyUpdated,
    Deleted,
    AlreadyAbsent,
    Remediated,
    AlreadyCompliant,
}

impl Message {
    /// Whether the reconciliation changed the appliance.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(
            self,
            Self::Created | Self::Updated | Self::Deleted | Self::Remediated
        )
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Created => "Server Profile created.",
            Self::Updated => "Server Profile updated.",
            Self::AlreadyUpdated => "Server Profile is already updated.",
            Self::Deleted => "Deleted profile.",
            Self::AlreadyAbsent => "Nothing to do.",
            Self::Remediated => "Server Profile remediated.",
            Self::AlreadyCompliant => "Server Profile is already compliant.",
        })
    }
}
