// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process host backed by a broadcast channel.
//!
//! [`EventBus`] implements [`Host`](crate::host::Host): it keeps a registry
//! of devices and entities with their last published state, and broadcasts a
//! [`StateEvent`] for every registration, notification and removal.
//!
//! # Examples
//!
//! ```
//! use macs::config::IntegrationConfig;
//! use macs::entity::Entity;
//! use macs::event::{EventBus, StateEvent};
//! use macs::Integration;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let mut macs = Integration::setup(&IntegrationConfig::default(), bus.clone()).unwrap();
//! macs.select_mood("happy").unwrap();
//!
//! let id = macs.mood_entity().id().clone();
//! assert_eq!(bus.state(&id).unwrap().as_option(), Some("happy"));
//! assert!(matches!(rx.try_recv().unwrap(), StateEvent::DeviceRegistered { .. }));
//! ```

mod event_bus;
mod state_event;

pub use event_bus::EventBus;
pub use state_event::StateEvent;
