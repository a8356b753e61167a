// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity identifier types.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ValueError;

/// Host platform an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Dropdown of fixed labels.
    Select,
    /// Numeric value with a range.
    Number,
}

impl Platform {
    /// Returns the platform name used in entity ids.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(Self::Select),
            "number" => Ok(Self::Number),
            _ => Err(ValueError::InvalidPlatform(s.to_string())),
        }
    }
}

/// Host-facing identifier of an entity, `<platform>.<object_id>`.
///
/// # Examples
///
/// ```
/// use macs::entity::{EntityId, Platform};
///
/// let id = EntityId::new(Platform::Select, "macs_mood");
/// assert_eq!(id.to_string(), "select.macs_mood");
///
/// let parsed: EntityId = "number.macs_brightness".parse().unwrap();
/// assert_eq!(parsed.platform(), Platform::Number);
/// assert_eq!(parsed.object_id(), "macs_brightness");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    platform: Platform,
    object_id: String,
}

impl EntityId {
    /// Creates an entity id.
    #[must_use]
    pub fn new(platform: Platform, object_id: impl Into<String>) -> Self {
        Self {
            platform,
            object_id: object_id.into(),
        }
    }

    /// Returns the platform part.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the object id part.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.platform, self.object_id)
    }
}

impl FromStr for EntityId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidEntityId(s.to_string());
        let (platform, object_id) = s.split_once('.').ok_or_else(invalid)?;
        if object_id.is_empty() {
            return Err(invalid());
        }
        let platform = platform.parse().map_err(|_| invalid())?;
        Ok(Self::new(platform, object_id))
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
