// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared device identity.
//!
//! Every entity of the integration points at the same [`DeviceInfo`] so the
//! host groups them under one device. The value is built once during setup
//! and shared through an [`Arc`]; it is never copied per entity.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::DeviceConfig;

/// Logical device that groups the integration's entities in the host UI.
///
/// # Examples
///
/// ```
/// use macs::device::DeviceInfo;
///
/// let device = DeviceInfo::new("macs", "macs", "M.A.C.S.", "Glyn Davidson", "Mood-Aware Character SVG");
/// assert_eq!(device.identifier(), ("macs", "macs"));
/// assert_eq!(device.to_string(), "M.A.C.S. (Glyn Davidson Mood-Aware Character SVG)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceInfo {
    domain: String,
    id: String,
    name: String,
    manufacturer: String,
    model: String,
}

impl DeviceInfo {
    /// Creates a device identity.
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            id: id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }

    /// Builds the shared device identity for `domain` from configuration.
    #[must_use]
    pub fn shared(domain: &str, config: &DeviceConfig) -> Arc<Self> {
        Arc::new(Self::new(
            domain,
            &config.id,
            &config.name,
            &config.manufacturer,
            &config.model,
        ))
    }

    /// Returns the `(domain, id)` pair the host registry keys devices by.
    #[must_use]
    pub fn identifier(&self) -> (&str, &str) {
        (&self.domain, &self.id)
    }

    /// Integration domain owning the device.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Stable device id within the domain.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Manufacturer string.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Model string.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.manufacturer, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_uses_config() {
        let device = DeviceInfo::shared("macs", &DeviceConfig::default());
        assert_eq!(device.identifier(), ("macs", "macs"));
        assert_eq!(device.name(), "M.A.C.S.");
        assert_eq!(device.manufacturer(), "Glyn Davidson");
        assert_eq!(device.model(), "Mood-Aware Character SVG");
    }

    #[test]
    fn serializes_identifiers() {
        let device = DeviceInfo::new("macs", "desk", "Desk", "Me", "Proto");
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["domain"], "macs");
        assert_eq!(json["id"], "desk");
        assert_eq!(json["model"], "Proto");
    }
}
