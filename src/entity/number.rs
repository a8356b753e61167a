// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness slider entity.

use std::sync::Arc;

use super::{Entity, EntityCapabilities, EntityDescriptor};
use crate::device::DeviceInfo;
use crate::error::Result;
use crate::host::Host;
use crate::state::EntityState;
use crate::types::Brightness;

/// Number entity holding the brightness percentage.
///
/// Writes are never rejected: the value is clamped to 0-100 and the host is
/// notified on every write, even when the stored value does not change.
#[derive(Debug, Clone)]
pub struct NumberEntity {
    descriptor: EntityDescriptor,
    value: Brightness,
}

impl NumberEntity {
    /// Creates a number entity at full brightness.
    #[must_use]
    pub fn new(descriptor: EntityDescriptor) -> Self {
        Self {
            descriptor,
            value: Brightness::default(),
        }
    }

    /// Creates the brightness slider.
    #[must_use]
    pub fn brightness(domain: &str, device: Arc<DeviceInfo>) -> Self {
        Self::new(EntityDescriptor::new(
            domain,
            "brightness",
            "Brightness",
            "mdi:brightness-6",
            device,
            EntityCapabilities::brightness(),
        ))
    }

    /// Returns the stored brightness.
    #[must_use]
    pub const fn value(&self) -> Brightness {
        self.value
    }

    /// Clamps `value` into range, stores it and notifies the host.
    ///
    /// Returns the value actually stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`](crate::Error::Host) if the notification fails.
    pub fn set_native_value(&mut self, value: f64, host: &dyn Host) -> Result<Brightness> {
        self.value = Brightness::clamped(value);
        tracing::debug!(
            entity = %self.id(),
            requested = value,
            stored = self.value.value(),
            "Brightness set"
        );

        host.notify(self.id(), &self.state())?;
        Ok(self.value)
    }
}

impl Entity for NumberEntity {
    fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    fn state(&self) -> EntityState {
        EntityState::Number(self.value)
    }
}
