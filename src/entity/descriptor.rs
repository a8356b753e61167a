// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registration metadata for entities.

use std::sync::Arc;

use serde::Serialize;

use super::{EntityId, Platform};
use crate::device::DeviceInfo;
use crate::types::{Brightness, OptionSet};

/// How the host should render a number entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    /// Let the host decide.
    #[default]
    Auto,
    /// Numeric input field.
    Box,
    /// Slider.
    Slider,
}

/// Platform-specific capabilities advertised at registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum EntityCapabilities {
    /// Select entity options.
    Select {
        /// Allowed labels in display order.
        options: OptionSet,
    },
    /// Number entity range.
    Number {
        /// Lowest accepted value.
        min: f64,
        /// Highest accepted value.
        max: f64,
        /// UI step.
        step: f64,
        /// Unit of measurement.
        unit: &'static str,
        /// Rendering mode.
        mode: NumberMode,
    },
}

impl EntityCapabilities {
    /// Capabilities of a brightness slider.
    #[must_use]
    pub fn brightness() -> Self {
        Self::Number {
            min: Brightness::MIN.value(),
            max: Brightness::MAX.value(),
            step: Brightness::STEP,
            unit: Brightness::UNIT,
            mode: NumberMode::Slider,
        }
    }

    /// Returns the platform these capabilities belong to.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            Self::Select { .. } => Platform::Select,
            Self::Number { .. } => Platform::Number,
        }
    }
}

/// Everything the host needs to register an entity.
///
/// The unique id is `{domain}_{key}` and doubles as the suggested object id,
/// so the default domain yields `select.macs_mood`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use macs::device::DeviceInfo;
/// use macs::entity::{EntityCapabilities, EntityDescriptor};
///
/// let device = Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "Glyn Davidson", "SVG"));
/// let descriptor = EntityDescriptor::new(
///     "macs",
///     "brightness",
///     "Brightness",
///     "mdi:brightness-6",
///     Arc::clone(&device),
///     EntityCapabilities::brightness(),
/// );
/// assert_eq!(descriptor.unique_id(), "macs_brightness");
/// assert_eq!(descriptor.entity_id().to_string(), "number.macs_brightness");
/// assert!(Arc::ptr_eq(descriptor.device(), &device));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDescriptor {
    entity_id: EntityId,
    unique_id: String,
    name: String,
    icon: String,
    has_entity_name: bool,
    device: Arc<DeviceInfo>,
    capabilities: EntityCapabilities,
}

impl EntityDescriptor {
    /// Creates a descriptor for the entity `key` of `domain`.
    #[must_use]
    pub fn new(
        domain: &str,
        key: &str,
        name: impl Into<String>,
        icon: impl Into<String>,
        device: Arc<DeviceInfo>,
        capabilities: EntityCapabilities,
    ) -> Self {
        let unique_id = format!("{domain}_{key}");
        Self {
            entity_id: EntityId::new(capabilities.platform(), unique_id.clone()),
            unique_id,
            name: name.into(),
            icon: icon.into(),
            has_entity_name: true,
            device,
            capabilities,
        }
    }

    /// Host-facing entity id.
    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    /// Registry unique id.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Object id the host should prefer when naming the entity.
    #[must_use]
    pub fn suggested_object_id(&self) -> &str {
        &self.unique_id
    }

    /// Display name, shown after the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Material Design icon.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Whether the name is relative to the device name.
    #[must_use]
    pub const fn has_entity_name(&self) -> bool {
        self.has_entity_name
    }

    /// Platform of the entity.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.entity_id.platform()
    }

    /// Shared device the entity is grouped under.
    #[must_use]
    pub fn device(&self) -> &Arc<DeviceInfo> {
        &self.device
    }

    /// Platform-specific capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &EntityCapabilities {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> Arc<DeviceInfo> {
        Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "Glyn Davidson", "SVG"))
    }

    #[test]
    fn select_descriptor_ids() {
        let options = OptionSet::new(["idle", "happy"]).unwrap();
        let descriptor = EntityDescriptor::new(
            "macs",
            "mood",
            "Mood",
            "mdi:emoticon",
            device(),
            EntityCapabilities::Select { options },
        );
        assert_eq!(descriptor.platform(), Platform::Select);
        assert_eq!(descriptor.unique_id(), "macs_mood");
        assert_eq!(descriptor.suggested_object_id(), "macs_mood");
        assert_eq!(descriptor.entity_id().to_string(), "select.macs_mood");
        assert!(descriptor.has_entity_name());
    }

    #[test]
    fn brightness_capabilities() {
        let EntityCapabilities::Number {
            min,
            max,
            step,
            unit,
            mode,
        } = EntityCapabilities::brightness()
        else {
            panic!("expected number capabilities");
        };
        assert!(min.abs() < f64::EPSILON);
        assert!((max - 100.0).abs() < f64::EPSILON);
        assert!((step - 1.0).abs() < f64::EPSILON);
        assert_eq!(unit, "%");
        assert_eq!(mode, NumberMode::Slider);
    }

    #[test]
    fn serializes_for_host() {
        let descriptor = EntityDescriptor::new(
            "macs",
            "brightness",
            "Brightness",
            "mdi:brightness-6",
            device(),
            EntityCapabilities::brightness(),
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["entity_id"], "number.macs_brightness");
        assert_eq!(json["capabilities"]["platform"], "number");
        assert_eq!(json["capabilities"]["mode"], "slider");
        assert_eq!(json["device"]["name"], "M.A.C.S.");
    }
}
