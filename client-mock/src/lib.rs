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

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;

use oneview_core::AvailableTargets;
use oneview_core::CompliancePreview;
use oneview_core::Document;
use oneview_core::JsonValue;
use oneview_core::OneView;
use oneview_core::PatchOperation;
use oneview_core::PowerStateRequest;
use oneview_core::RemoteError;
use oneview_core::ResourceKind;
use oneview_core::ResourceUri;
use oneview_core::TargetConstraints;
use serde::de::DeserializeOwned;
use serde_json::from_value;
use serde_json::Error as JsonError;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error<E> {
    ErrorResponse(E),
    MutexLock(String),
    NothingIsExpected,
    BadResponseJson(JsonError),
    UnexpectedGetByName(ResourceKind, String, ExpectedRequest),
    UnexpectedGet(ResourceUri, ExpectedRequest),
    UnexpectedNewProfile(ResourceUri, ExpectedRequest),
    UnexpectedCreate(String, ExpectedRequest),
    UnexpectedUpdate(ResourceUri, String, ExpectedRequest),
    UnexpectedPatch(ResourceUri, String, ExpectedRequest),
    UnexpectedDelete(String, ExpectedRequest),
    UnexpectedAvailableTargets(TargetConstraints, ExpectedRequest),
    UnexpectedCompliancePreview(ResourceUri, ExpectedRequest),
    UnexpectedPowerState(ResourceUri, PowerStateRequest, ExpectedRequest),
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ErrorResponse(err) => write!(f, "response: {err}"),
            Self::MutexLock(err) => write!(f, "lock error: {err}"),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::BadResponseJson(err) => write!(f, "bad json response: {err}"),
            Self::UnexpectedGetByName(kind, name, expected) => {
                write!(f, "unexpected get by name: {kind} '{name}'; expected: {expected:?}")
            }
            Self::UnexpectedGet(uri, expected) => {
                write!(f, "unexpected get: {uri}; expected: {expected:?}")
            }
            Self::UnexpectedNewProfile(uri, expected) => {
                write!(f, "unexpected new profile: {uri}; expected: {expected:?}")
            }
            Self::UnexpectedCreate(json, expected) => {
                write!(f, "unexpected create: json: {json} expected: {expected:?}")
            }
            Self::UnexpectedUpdate(uri, json, expected) => {
                write!(
                    f,
                    "unexpected update: {uri}; json: {json} expected: {expected:?}"
                )
            }
            Self::UnexpectedPatch(uri, patch, expected) => {
                write!(
                    f,
                    "unexpected patch: {uri}; patch: {patch} expected: {expected:?}"
                )
            }
            Self::UnexpectedDelete(json, expected) => {
                write!(f, "unexpected delete: json: {json} expected: {expected:?}")
            }
            Self::UnexpectedAvailableTargets(constraints, expected) => {
                write!(
                    f,
                    "unexpected available targets: {constraints:?}; expected: {expected:?}"
                )
            }
            Self::UnexpectedCompliancePreview(uri, expected) => {
                write!(f, "unexpected compliance preview: {uri}; expected: {expected:?}")
            }
            Self::UnexpectedPowerState(uri, request, expected) => {
                write!(
                    f,
                    "unexpected power state: {uri}; request: {request:?} expected: {expected:?}"
                )
            }
        }
    }
}

impl<E: StdError + 'static> StdError for Error<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::ErrorResponse(err) => Some(err),
            Self::BadResponseJson(err) => Some(err),
            _ => None,
        }
    }
}

impl<E: RemoteError + 'static> RemoteError for Error<E> {
    fn error_code(&self) -> Option<&str> {
        match self {
            Self::ErrorResponse(err) => err.error_code(),
            _ => None,
        }
    }
}

impl<E> Error<E> {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

/// Mock client. Every call consumes the first expectation of the queue
/// and fails if the call does not match it.
pub struct Client<E> {
    expect: Mutex<VecDeque<Expect<E>>>,
}

impl<E> Default for Client<E> {
    fn default() -> Self {
        Self {
            expect: Mutex::new(VecDeque::new()),
        }
    }
}

impl<E> Client<E> {
    /// Replace all expectations with a single one.
    pub fn expect(&self, exp: Expect<E>) {
        self.expect_seq([exp]);
    }

    /// Replace all expectations with a sequence of calls.
    pub fn expect_seq(&self, seq: impl IntoIterator<Item = Expect<E>>) {
        let expect: &mut VecDeque<Expect<E>> = &mut self.expect.lock().expect("not poisoned");
        expect.clear();
        expect.extend(seq);
    }

    /// Append expectation to the end of the queue.
    pub fn push(&self, exp: Expect<E>) {
        self.expect.lock().expect("not poisoned").push_back(exp);
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expect.lock().expect("not poisoned").len()
    }

    /// All expected calls happened.
    pub fn is_satisfied(&self) -> bool {
        self.remaining() == 0
    }

    pub fn debug_expect(&self) {
        let expect: &VecDeque<Expect<E>> = &self.expect.lock().expect("not poisoned");
        println!("Expectations (total: {})", expect.len());
        for v in expect {
            println!("{:#?}", v.request);
        }
    }

    fn next(&self) -> Result<Expect<E>, Error<E>> {
        self.expect
            .lock()
            .map_err(Error::mutex_lock)?
            .pop_front()
            .ok_or(Error::NothingIsExpected)
    }
}

fn respond<T: DeserializeOwned, E>(response: Result<JsonValue, E>) -> Result<T, Error<E>> {
    let response = response.map_err(Error::ErrorResponse)?;
    from_value(response).map_err(Error::BadResponseJson)
}

impl<E> OneView for Client<E>
where
    E: RemoteError + 'static,
{
    type Error = Error<E>;

    async fn get_by_name(
        &self,
        in_kind: ResourceKind,
        in_name: &str,
    ) -> Result<Option<Document>, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::GetByName { kind, name },
                response,
            } if kind == in_kind && name == in_name => respond(response),
            expect => Err(Error::UnexpectedGetByName(
                in_kind,
                in_name.to_string(),
                expect.request,
            )),
        }
    }

    async fn get(&self, in_uri: &ResourceUri) -> Result<Document, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::Get { uri },
                response,
            } if uri == *in_uri => respond(response),
            expect => Err(Error::UnexpectedGet(in_uri.clone(), expect.request)),
        }
    }

    async fn new_profile(&self, in_template: &ResourceUri) -> Result<Document, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::NewProfile { template },
                response,
            } if template == *in_template => respond(response),
            expect => Err(Error::UnexpectedNewProfile(
                in_template.clone(),
                expect.request,
            )),
        }
    }

    async fn create(&self, profile: &Document) -> Result<Document, Self::Error> {
        let in_request = JsonValue::Object(profile.clone());
        match self.next()? {
            Expect {
                request: ExpectedRequest::Create { request },
                response,
            } if request == in_request => respond(response),
            expect => Err(Error::UnexpectedCreate(
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn update(
        &self,
        profile: &Document,
        in_uri: &ResourceUri,
    ) -> Result<Document, Self::Error> {
        let in_request = JsonValue::Object(profile.clone());
        match self.next()? {
            Expect {
                request: ExpectedRequest::Update { uri, request },
                response,
            } if uri == *in_uri && request == in_request => respond(response),
            expect => Err(Error::UnexpectedUpdate(
                in_uri.clone(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn patch(
        &self,
        in_uri: &ResourceUri,
        in_op: PatchOperation,
        in_path: &str,
        in_value: JsonValue,
    ) -> Result<Document, Self::Error> {
        match self.next()? {
            Expect {
                request:
                    ExpectedRequest::Patch {
                        uri,
                        op,
                        path,
                        value,
                    },
                response,
            } if uri == *in_uri && op == in_op && path == in_path && value == in_value => {
                respond(response)
            }
            expect => Err(Error::UnexpectedPatch(
                in_uri.clone(),
                format!("{in_op} {in_path} {in_value}"),
                expect.request,
            )),
        }
    }

    async fn delete(&self, profile: &Document) -> Result<(), Self::Error> {
        let in_request = JsonValue::Object(profile.clone());
        match self.next()? {
            Expect {
                request: ExpectedRequest::Delete { request },
                response,
            } if request == in_request => response.map(|_| ()).map_err(Error::ErrorResponse),
            expect => Err(Error::UnexpectedDelete(
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn available_targets(
        &self,
        in_constraints: &TargetConstraints,
    ) -> Result<AvailableTargets, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::AvailableTargets { constraints },
                response,
            } if constraints == *in_constraints => respond(response),
            expect => Err(Error::UnexpectedAvailableTargets(
                in_constraints.clone(),
                expect.request,
            )),
        }
    }

    async fn compliance_preview(
        &self,
        in_uri: &ResourceUri,
    ) -> Result<CompliancePreview, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::CompliancePreview { uri },
                response,
            } if uri == *in_uri => respond(response),
            expect => Err(Error::UnexpectedCompliancePreview(
                in_uri.clone(),
                expect.request,
            )),
        }
    }

    async fn update_power_state(
        &self,
        in_request: &PowerStateRequest,
        in_uri: &ResourceUri,
    ) -> Result<Document, Self::Error> {
        match self.next()? {
            Expect {
                request: ExpectedRequest::UpdatePowerState { uri, request },
                response,
            } if uri == *in_uri && request == *in_request => respond(response),
            expect => Err(Error::UnexpectedPowerState(
                in_uri.clone(),
                *in_request,
                expect.request,
            )),
        }
    }
}

