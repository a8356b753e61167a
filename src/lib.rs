// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `macs` - entities for the M.A.C.S. (Mood-Aware Character SVG) device.
//!
//! This library exposes three UI-controllable entities to a home-automation
//! host, all grouped under one device:
//!
//! - **Mood**: a dropdown restricted to a configured set of labels
//! - **Weather**: a second, independent dropdown
//! - **Brightness**: a 0-100% slider
//!
//! The host platform is reached only through the [`Host`] trait, so the
//! entity logic does not depend on any particular runtime.
//! [`event::EventBus`] provides an in-process host built on a tokio
//! broadcast channel.
//!
//! # Write semantics
//!
//! - Selecting an option outside the allowed set is silently ignored: the
//!   value stays as it was, the host is not notified, and the call returns
//!   [`SelectOutcome::RejectedInvalidOption`].
//! - Brightness is never rejected. Input is clamped into range and the host
//!   is notified on every write, even if the value is unchanged.
//!
//! # Quick Start
//!
//! ```
//! use macs::{Integration, IntegrationConfig, SelectOutcome};
//! use macs::event::EventBus;
//!
//! # fn main() -> macs::Result<()> {
//! let bus = EventBus::new();
//! let mut macs = Integration::setup(&IntegrationConfig::default(), bus.clone())?;
//!
//! assert_eq!(macs.select_weather("rain")?, SelectOutcome::Accepted);
//! macs.set_brightness(-20.0)?;
//!
//! assert_eq!(macs.weather(), "rain");
//! assert_eq!(macs.brightness().value(), 0.0);
//! assert_eq!(bus.entity_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Option Sets
//!
//! ```
//! use macs::{Integration, IntegrationConfig};
//! use macs::event::EventBus;
//!
//! let config = IntegrationConfig::default()
//!     .with_moods(["idle", "happy", "sad", "angry"], "idle")
//!     .with_weathers(["none", "sunny", "rainy", "snowy", "stormy"], "none");
//!
//! let mut macs = Integration::setup(&config, EventBus::new()).unwrap();
//! assert!(macs.select_mood("angry").unwrap().is_accepted());
//! assert!(!macs.select_mood("bored").unwrap().is_accepted());
//! ```

pub mod config;
pub mod device;
pub mod entity;
pub mod error;
pub mod event;
pub mod host;
mod integration;
pub mod state;
pub mod types;

pub use config::{DeviceConfig, IntegrationConfig, SelectorConfig};
pub use device::DeviceInfo;
pub use entity::{
    Entity, EntityDescriptor, EntityId, NumberEntity, Platform, SelectEntity, SelectOutcome,
};
pub use error::{ConfigError, Error, HostError, Result, ValueError};
pub use event::{EventBus, StateEvent};
pub use host::Host;
pub use integration::Integration;
pub use types::{Brightness, OptionSet};
