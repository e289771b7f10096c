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

//! Integration tests of profile removal.

use oneview_core::PowerControl;
use oneview_core::PowerStateRequest;
use oneview_core::ResourceKind;
use oneview_server_profile::Error as ReconcileError;
use oneview_server_profile::Message;
use oneview_server_profile::State;
use oneview_tests::doc;
use oneview_tests::fixtures::*;
use oneview_tests::reconciler;
use oneview_tests::Client;
use oneview_tests::Expect;
use oneview_tests::TestError;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

#[test]
async fn power_off_and_delete_assigned_profile() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, created_profile()),
        Expect::get(
            ASSIGNED_HARDWARE_URI,
            hardware(ASSIGNED_HARDWARE_URI, "On"),
        ),
        Expect::power_state(
            ASSIGNED_HARDWARE_URI,
            PowerStateRequest::off(PowerControl::PressAndHold),
        ),
        Expect::delete(created_profile()),
    ]);

    let outcome = reconciler(client.clone())
        .reconcile(State::Absent, doc(json!({ "name": PROFILE_NAME })))
        .await?;

    assert!(outcome.changed);
    assert_eq!(outcome.message, Message::Deleted);
    assert_eq!(outcome.message.to_string(), "Deleted profile.");
    assert!(outcome.facts.is_none());
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn delete_unassigned_profile_without_power_calls() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(
            ResourceKind::ServerProfile,
            PROFILE_NAME,
            stored_basic_profile(),
        ),
        Expect::delete(stored_basic_profile()),
    ]);

    let outcome = reconciler(client.clone())
        .reconcile(State::Absent, doc(json!({ "name": PROFILE_NAME })))
        .await?;

    assert_eq!(outcome.message, Message::Deleted);
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn nothing_to_do_when_profile_absent() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect(Expect::not_found(ResourceKind::ServerProfile, PROFILE_NAME));

    let outcome = reconciler(client.clone())
        .reconcile(State::Absent, doc(json!({ "name": PROFILE_NAME })))
        .await?;

    assert!(!outcome.changed);
    assert_eq!(outcome.message, Message::AlreadyAbsent);
    assert_eq!(outcome.message.to_string(), "Nothing to do.");
    assert!(outcome.facts.is_none());
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_delete_fails() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(
            ResourceKind::ServerProfile,
            PROFILE_NAME,
            stored_basic_profile(),
        ),
        Expect::delete(stored_basic_profile()).with_error(TestError::message("Fake message error")),
    ]);

    let err = reconciler(client.clone())
        .reconcile(State::Absent, doc(json!({ "name": PROFILE_NAME })))
        .await
        .expect_err("delete must fail");

    assert!(matches!(err, ReconcileError::Remote(_)));
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_lookup_fails() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect(
        Expect::not_found(ResourceKind::ServerProfile, PROFILE_NAME)
            .with_error(TestError::message("Appliance unavailable")),
    );

    let err = reconciler(client.clone())
        .reconcile(State::Absent, doc(json!({ "name": PROFILE_NAME })))
        .await
        .expect_err("lookup must fail");

    assert_eq!(err.to_string(), "response: Appliance unavailable");
    assert!(client.is_satisfied());
    Ok(())
}
