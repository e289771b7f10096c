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

//! Integration tests of profile update.

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
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

const POWER_OFF: PowerStateRequest = PowerStateRequest::off(PowerControl::PressAndHold);
const POWER_ON: PowerStateRequest = PowerStateRequest::on(PowerControl::MomentaryPress);

fn assigned_profile() -> JsonValue {
    let mut profile = doc(stored_basic_profile());
    profile.insert("serverHardwareUri".into(), ASSIGNED_HARDWARE_URI.into());
    JsonValue::Object(profile)
}

fn described(profile: JsonValue) -> JsonValue {
    let mut profile = doc(profile);
    profile.insert("description".into(), "Updated profile".into());
    JsonValue::Object(profile)
}

#[test]
async fn update_when_data_changed() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut expect = vec![
        Expect::get_by_name(
            ResourceKind::ServerProfile,
            PROFILE_NAME,
            stored_basic_profile(),
        ),
        Expect::update(
            PROFILE_URI,
            described(stored_basic_profile()),
            created_profile(),
        ),
    ];
    expect.extend(facts_expectations(&created_profile()));
    client.expect_seq(expect);

    let outcome = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await?;

    assert!(outcome.changed);
    assert_eq!(outcome.message, Message::Updated);
    let facts = outcome.facts.ok_or("facts must be reported")?;
    assert!(!facts.created);
    assert_eq!(facts.server_profile, doc(created_profile()));
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn power_off_before_update_when_data_changed() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut expect = vec![
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, assigned_profile()),
        Expect::get(
            ASSIGNED_HARDWARE_URI,
            hardware(ASSIGNED_HARDWARE_URI, "On"),
        ),
        Expect::power_state(ASSIGNED_HARDWARE_URI, POWER_OFF),
        Expect::update(
            PROFILE_URI,
            described(assigned_profile()),
            created_profile(),
        ),
        Expect::power_state(ASSIGNED_HARDWARE_URI, POWER_ON),
    ];
    expect.extend(facts_expectations(&created_profile()));
    client.expect_seq(expect);

    let outcome = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await?;

    assert_eq!(outcome.message, Message::Updated);
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn powered_off_hardware_is_not_powered_on() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut expect = vec![
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, assigned_profile()),
        Expect::get(
            ASSIGNED_HARDWARE_URI,
            hardware(ASSIGNED_HARDWARE_URI, "Off"),
        ),
        Expect::update(
            PROFILE_URI,
            described(assigned_profile()),
            created_profile(),
        ),
    ];
    expect.extend(facts_expectations(&created_profile()));
    client.expect_seq(expect);

    let outcome = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await?;

    assert_eq!(outcome.message, Message::Updated);
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn power_off_failure_aborts_update() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, assigned_profile()),
        Expect::get(
            ASSIGNED_HARDWARE_URI,
            hardware(ASSIGNED_HARDWARE_URI, "On"),
        ),
        Expect::power_state(ASSIGNED_HARDWARE_URI, POWER_OFF)
            .with_error(TestError::message("Hardware is locked")),
    ]);

    let err = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await
        .expect_err("power off must fail");

    assert!(matches!(err, ReconcileError::Remote(_)));
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn power_on_failure_is_surfaced() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, assigned_profile()),
        Expect::get(
            ASSIGNED_HARDWARE_URI,
            hardware(ASSIGNED_HARDWARE_URI, "On"),
        ),
        Expect::power_state(ASSIGNED_HARDWARE_URI, POWER_OFF),
        Expect::update(
            PROFILE_URI,
            described(assigned_profile()),
            created_profile(),
        ),
        Expect::power_state(ASSIGNED_HARDWARE_URI, POWER_ON)
            .with_error(TestError::message("Power button is stuck")),
    ]);

    let err = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await
        .expect_err("power on must fail");

    assert!(matches!(err, ReconcileError::Remote(_)));
    assert_eq!(err.to_string(), "response: Power button is stuck");
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_stored_profile_has_no_uri() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect(Expect::get_by_name(
        ResourceKind::ServerProfile,
        PROFILE_NAME,
        basic_profile(),
    ));

    let err = reconciler(client.clone())
        .reconcile(State::Present, doc(described(basic_profile())))
        .await
        .expect_err("profile without uri cannot be updated");

    assert!(matches!(
        err,
        ReconcileError::InvalidResource {
            kind: ResourceKind::ServerProfile,
            field: "uri",
        }
    ));
    assert_eq!(
        err.to_string(),
        "Server Profile returned by the appliance has no 'uri'"
    );
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_template_has_no_uri() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut template = doc(basic_template());
    template.remove("uri");
    client.expect_seq([
        Expect::get_by_name(
            ResourceKind::ServerProfile,
            PROFILE_NAME,
            stored_basic_profile(),
        ),
        Expect::get_by_name(
            ResourceKind::ServerProfileTemplate,
            TEMPLATE_NAME,
            JsonValue::Object(template),
        ),
    ]);

    let mut data = doc(basic_profile());
    data.insert("server_template".into(), TEMPLATE_NAME.into());
    let err = reconciler(client.clone())
        .reconcile(State::Present, data)
        .await
        .expect_err("template without uri cannot be bound");

    assert!(matches!(
        err,
        ReconcileError::InvalidResource {
            kind: ResourceKind::ServerProfileTemplate,
            field: "uri",
        }
    ));
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn no_update_when_data_is_equal() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut expect = vec![Expect::get_by_name(
        ResourceKind::ServerProfile,
        PROFILE_NAME,
        created_profile(),
    )];
    expect.extend(facts_expectations(&created_profile()));
    client.expect_seq(expect);

    let outcome = reconciler(client.clone())
        .reconcile(
            State::Present,
            doc(json!({
                "name": PROFILE_NAME,
                "serverHardwareTypeUri": SHT_URI,
                "bios": { "manageBios": false },
                "bootMode": { "mode": null },
            })),
        )
        .await?;

    assert!(!outcome.changed);
    assert_eq!(outcome.message, Message::AlreadyUpdated);
    assert_eq!(
        outcome.facts.map(|f| f.server_profile),
        Some(doc(created_profile()))
    );
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn template_reference_bound_on_update() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    let mut updated = doc(stored_basic_profile());
    updated.insert("serverProfileTemplateUri".into(), TEMPLATE_URI.into());
    let updated = JsonValue::Object(updated);
    let mut expect = vec![
        Expect::get_by_name(
            ResourceKind::ServerProfile,
            PROFILE_NAME,
            stored_basic_profile(),
        ),
        Expect::get_by_name(
            ResourceKind::ServerProfileTemplate,
            TEMPLATE_NAME,
            basic_template(),
        ),
        Expect::update(PROFILE_URI, &updated, &updated),
    ];
    expect.extend(facts_expectations(&updated));
    client.expect_seq(expect);

    let mut data = doc(basic_profile());
    data.insert("server_template".into(), TEMPLATE_NAME.into());
    let outcome = reconciler(client.clone())
        .reconcile(State::Present, data)
        .await?;

    assert_eq!(outcome.message, Message::Updated);
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_template_not_found_on_update() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, created_profile()),
        Expect::not_found(ResourceKind::ServerProfileTemplate, TEMPLATE_NAME),
    ]);

    let mut data = doc(basic_profile());
    data.insert("server_template".into(), TEMPLATE_NAME.into());
    let err = reconciler(client.clone())
        .reconcile(State::Present, data)
        .await
        .expect_err("template must not be found");

    assert!(matches!(
        err,
        ReconcileError::NotFound {
            kind: ResourceKind::ServerProfileTemplate,
            ..
        }
    ));
    assert!(client.is_satisfied());
    Ok(())
}

#[test]
async fn fail_when_hardware_not_found_on_update() -> Result<(), Box<dyn StdError>> {
    let client = Arc::new(Client::default());
    client.expect_seq([
        Expect::get_by_name(ResourceKind::ServerProfile, PROFILE_NAME, created_profile()),
        Expect::not_found(ResourceKind::ServerHardware, HARDWARE_NAME),
    ]);

    let mut data = doc(basic_profile());
    data.insert("server_hardware".into(), HARDWARE_NAME.into());
    let err = reconciler(client.clone())
        .reconcile(State::Present, data)
        .await
        .expect_err("hardware must not be found");

    assert_eq!(
        err.to_string(),
        "Informed Server Hardware 'ServerHardwareName' not found"
    );
    assert!(client.is_satisfied());
    Ok(())
}
