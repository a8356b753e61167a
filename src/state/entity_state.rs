// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current value of a single entity.

use std::fmt;

use serde::Serialize;

use crate::types::Brightness;

/// Snapshot of an entity's value as the host stores it.
///
/// Serialized untagged: a select state is a JSON string, a number state a
/// JSON number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityState {
    /// Label held by a select entity.
    Select(String),
    /// Value held by a number entity.
    Number(Brightness),
}

impl EntityState {
    /// Returns the selected label, if this is a select state.
    #[must_use]
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::Select(option) => Some(option),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a number state.
    #[must_use]
    pub fn as_number(&self) -> Option<Brightness> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Select(_) => None,
        }
    }

    /// Converts the state to JSON.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Select(option) => serde_json::Value::from(option.as_str()),
            Self::Number(value) => serde_json::Value::from(value.value()),
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(option) => f.write_str(option),
            Self::Number(value) => write!(f, "{}", value.value()),
        }
    }
}
