// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events broadcast by the [`EventBus`](super::EventBus).

use serde::Serialize;

use crate::device::DeviceInfo;
use crate::entity::EntityId;
use crate::state::EntityState;

/// Registry and state events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StateEvent {
    /// A device was added to the registry.
    DeviceRegistered {
        /// The registered device.
        device: DeviceInfo,
    },

    /// An entity was added with its initial state.
    EntityRegistered {
        /// The registered entity.
        entity_id: EntityId,
        /// Its initial state.
        state: EntityState,
    },

    /// An entity published its current state.
    ///
    /// Emitted for every accepted write, including writes that leave the
    /// value unchanged.
    StateChanged {
        /// The entity that changed.
        entity_id: EntityId,
        /// The published state.
        state: EntityState,
    },

    /// An entity was removed from the registry.
    EntityRemoved {
        /// The removed entity.
        entity_id: EntityId,
    },
}

impl StateEvent {
    /// Returns the entity this event concerns, if any.
    #[must_use]
    pub fn entity_id(&self) -> Option<&EntityId> {
        match self {
            Self::DeviceRegistered { .. } => None,
            Self::EntityRegistered { entity_id, .. }
            | Self::StateChanged { entity_id, .. }
            | Self::EntityRemoved { entity_id } => Some(entity_id),
        }
    }

    /// Returns the state carried by this event, if any.
    #[must_use]
    pub fn state(&self) -> Option<&EntityState> {
        match self {
            Self::EntityRegistered { state, .. } | Self::StateChanged { state, .. } => Some(state),
            Self::DeviceRegistered { .. } | Self::EntityRemoved { .. } => None,
        }
    }

    /// Returns `true` for registration and removal events.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        !self.is_state_change()
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Platform;

    #[test]
    fn accessors() {
        let id = EntityId::new(Platform::Select, "macs_mood");
        let changed = StateEvent::StateChanged {
            entity_id: id.clone(),
            state: EntityState::Select("happy".to_string()),
        };
        assert_eq!(changed.entity_id(), Some(&id));
        assert_eq!(changed.state().and_then(EntityState::as_option), Some("happy"));
        assert!(changed.is_state_change());
        assert!(!changed.is_lifecycle());

        let removed = StateEvent::EntityRemoved { entity_id: id };
        assert!(removed.is_lifecycle());
        assert_eq!(removed.state(), None);
    }

    #[test]
    fn serializes_tagged() {
        let event = StateEvent::StateChanged {
            entity_id: EntityId::new(Platform::Select, "macs_weather"),
            state: EntityState::Select("rain".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "event": "state_changed",
                "entity_id": "select.macs_weather",
                "state": "rain",
            })
        );
    }
}
