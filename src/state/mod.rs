// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity state values published to the host.
//!
//! # Examples
//!
//! ```
//! use macs::state::EntityState;
//! use macs::types::Brightness;
//!
//! let mood = EntityState::Select("happy".to_string());
//! assert_eq!(mood.to_json(), serde_json::json!("happy"));
//!
//! let level = EntityState::Number(Brightness::clamped(42.0));
//! assert_eq!(level.to_string(), "42");
//! ```

mod entity_state;

pub use entity_state::EntityState;
