// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types held by the entities.
//!
//! Each type upholds its invariant at construction time, so an entity can
//! never store a value outside its allowed domain.
//!
//! # Types
//!
//! - [`Brightness`] - Percentage clamped to 0-100
//! - [`OptionSet`] - Closed, ordered set of selector labels

mod brightness;
mod option_set;

pub use brightness::Brightness;
pub use option_set::OptionSet;
