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

//! Expectations for the client mock.

use oneview_core::PatchOperation;
use oneview_core::PowerStateRequest;
use oneview_core::ResourceKind;
use oneview_core::ResourceUri;
use oneview_core::TargetConstraints;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

pub type Response<E> = Result<JsonValue, E>;

/// Request expected by the client.
#[derive(Debug)]
pub enum ExpectedRequest {
    /// Expected lookup by name.
    GetByName { kind: ResourceKind, name: String },
    /// Expected Get.
    Get { uri: ResourceUri },
    /// Expected new profile from template.
    NewProfile { template: ResourceUri },
    /// Expected Create.
    Create { request: JsonValue },
    /// Expected Update.
    Update { uri: ResourceUri, request: JsonValue },
    /// Expected Patch.
    Patch {
        uri: ResourceUri,
        op: PatchOperation,
        path: String,
        value: JsonValue,
    },
    /// Expected Delete.
    Delete { request: JsonValue },
    /// Expected available targets query.
    AvailableTargets { constraints: TargetConstraints },
    /// Expected compliance preview.
    CompliancePreview { uri: ResourceUri },
    /// Expected power state change.
    UpdatePowerState {
        uri: ResourceUri,
        request: PowerStateRequest,
    },
}

/// Expectation for the tests.
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Response<E>,
}

fn json(v: impl Display) -> JsonValue {
    from_str(&v.to_string()).expect("invalid json")
}

impl<E> Expect<E> {
    pub fn get_by_name(kind: ResourceKind, name: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::GetByName {
                kind,
                name: name.to_string(),
            },
            response: Ok(json(response)),
        }
    }

    /// Lookup by name that finds nothing.
    pub fn not_found(kind: ResourceKind, name: impl Display) -> Self {
        Self::get_by_name(kind, name, "null")
    }

    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                uri: uri.to_string().into(),
            },
            response: Ok(json(response)),
        }
    }

    pub fn new_profile(template: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::NewProfile {
                template: template.to_string().into(),
            },
            response: Ok(json(response)),
        }
    }

    pub fn create(request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Create {
                request: json(request),
            },
            response: Ok(json(response)),
        }
    }

    pub fn update(uri: impl Display, request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Update {
                uri: uri.to_string().into(),
                request: json(request),
            },
            response: Ok(json(response)),
        }
    }

    pub fn patch(
        uri: impl Display,
        op: PatchOperation,
        path: impl Display,
        value: impl Display,
        response: impl Display,
    ) -> Self {
        Expect {
            request: ExpectedRequest::Patch {
                uri: uri.to_string().into(),
                op,
                path: path.to_string(),
                value: json(value),
            },
            response: Ok(json(response)),
        }
    }

    pub fn delete(request: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Delete {
                request: json(request),
            },
            response: Ok(JsonValue::Null),
        }
    }

    pub fn available_targets(constraints: TargetConstraints, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::AvailableTargets { constraints },
            response: Ok(json(response)),
        }
    }

    pub fn compliance_preview(uri: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::CompliancePreview {
                uri: uri.to_string().into(),
            },
            response: Ok(json(response)),
        }
    }

    pub fn power_state(uri: impl Display, request: PowerStateRequest) -> Self {
        Expect {
            request: ExpectedRequest::UpdatePowerState {
                uri: uri.to_string().into(),
                request,
            },
            response: Ok(JsonValue::Object(serde_json::Map::new())),
        }
    }

    /// Respond to the expected request with an error.
    #[must_use]
    pub fn with_error(self, err: E) -> Self {
        Expect {
            request: self.request,
            response: Err(err),
        }
    }
}
