// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entities exposed to the host platform.
//!
//! An entity is a single controllable value shown in the host UI. This crate
//! provides two kinds:
//!
//! - [`SelectEntity`] - one label out of a closed [`OptionSet`](crate::types::OptionSet)
//!   (mood, weather)
//! - [`NumberEntity`] - a clamped [`Brightness`](crate::types::Brightness) slider
//!
//! Each entity carries an [`EntityDescriptor`] with the metadata the host
//! needs to register it, including a shared reference to the device.

mod descriptor;
mod id;
mod number;
mod select;

pub use descriptor::{EntityCapabilities, EntityDescriptor, NumberMode};
pub use id::{EntityId, Platform};
pub use number::NumberEntity;
pub use select::{SelectEntity, SelectOutcome};

use crate::state::EntityState;

/// Common interface of every entity the integration owns.
pub trait Entity: Send + Sync {
    /// Registration metadata.
    fn descriptor(&self) -> &EntityDescriptor;

    /// Current value.
    fn state(&self) -> EntityState;

    /// Host-facing entity id, e.g. `select.macs_mood`.
    fn id(&self) -> &EntityId {
        self.descriptor().entity_id()
    }

    /// Current value as JSON, the form the host stores.
    fn state_json(&self) -> serde_json::Value {
        self.state().to_json()
    }
}
