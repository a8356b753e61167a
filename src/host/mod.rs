// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability interface to the host automation platform.
//!
//! The entities never talk to a concrete platform. Everything they need from
//! the host (device and entity registration, publishing a new state) goes
//! through the [`Host`] trait. [`EventBus`](crate::event::EventBus) is an
//! in-process implementation; embedders bridge their own platform by
//! implementing the trait.

use std::sync::Arc;

use crate::device::DeviceInfo;
use crate::entity::{EntityDescriptor, EntityId};
use crate::error::HostError;
use crate::state::EntityState;

/// Services the host platform provides to the integration.
///
/// Calls are made one at a time by the integration; implementations only
/// need `Send + Sync` so the integration itself can move between threads.
pub trait Host: Send + Sync {
    /// Registers the shared device before any of its entities.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses the device.
    fn register_device(&self, device: &DeviceInfo) -> Result<(), HostError>;

    /// Registers an entity with its initial state.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host refuses the entity.
    fn register(&self, entity: &EntityDescriptor, state: &EntityState) -> Result<(), HostError>;

    /// Publishes the current state of an entity.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the entity is unknown to the host or the
    /// host cannot accept the update.
    fn notify(&self, entity: &EntityId, state: &EntityState) -> Result<(), HostError>;

    /// Removes an entity when the integration unloads.
    ///
    /// Hosts that manage deregistration themselves can keep the default.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the host cannot remove the entity.
    fn unregister(&self, entity: &EntityId) -> Result<(), HostError> {
        let _ = entity;
        Ok(())
    }
}

impl<H: Host + ?Sized> Host for Arc<H> {
    fn register_device(&self, device: &DeviceInfo) -> Result<(), HostError> {
        (**self).register_device(device)
    }

    fn register(&self, entity: &EntityDescriptor, state: &EntityState) -> Result<(), HostError> {
        (**self).register(entity, state)
    }

    fn notify(&self, entity: &EntityId, state: &EntityState) -> Result<(), HostError> {
        (**self).notify(entity, state)
    }

    fn unregister(&self, entity: &EntityId) -> Result<(), HostError> {
        (**self).unregister(entity)
    }
}
