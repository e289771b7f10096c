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

//! Errors for tests

use oneview_core::RemoteError;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Appliance failure returned by the mock.
pub struct TestError {
    code: Option<String>,
    message: String,
}

impl TestError {
    /// Failed appliance task with error code.
    pub fn task(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Failure without error code.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

impl Display for TestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

impl Debug for TestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => Display::fmt(self, f),
        }
    }
}

impl StdError for TestError {}

impl RemoteError for TestError {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
