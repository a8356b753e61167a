// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast-backed host implementation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use super::StateEvent;
use crate::device::DeviceInfo;
use crate::entity::{EntityDescriptor, EntityId};
use crate::error::HostError;
use crate::host::Host;
use crate::state::EntityState;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Default)]
struct Registry {
    devices: HashMap<(String, String), DeviceInfo>,
    entities: HashMap<EntityId, RegisteredEntity>,
}

#[derive(Debug)]
struct RegisteredEntity {
    descriptor: EntityDescriptor,
    state: EntityState,
}

/// In-process host that records registrations and broadcasts state events.
///
/// Clones share the same registry and channel. If a subscriber falls more
/// than the channel capacity behind, it misses events and receives
/// `RecvError::Lagged`; the registry always holds the latest state.
///
/// # Examples
///
/// ```
/// use macs::event::EventBus;
///
/// let bus = EventBus::new();
/// let _rx = bus.subscribe();
/// assert_eq!(bus.subscriber_count(), 1);
/// assert_eq!(bus.entity_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StateEvent>,
    registry: Arc<RwLock<Registry>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            registry: Arc::new(RwLock::new(Registry::default())),
        }
    }

    /// Subscribes to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Returns the last published state of an entity.
    #[must_use]
    pub fn state(&self, entity: &EntityId) -> Option<EntityState> {
        self.registry
            .read()
            .entities
            .get(entity)
            .map(|e| e.state.clone())
    }

    /// Returns the registration metadata of an entity.
    #[must_use]
    pub fn descriptor(&self, entity: &EntityId) -> Option<EntityDescriptor> {
        self.registry
            .read()
            .entities
            .get(entity)
            .map(|e| e.descriptor.clone())
    }

    /// Returns the ids of all registered entities, sorted.
    #[must_use]
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.registry.read().entities.keys().cloned().collect();
        ids.sort_by_key(ToString::to_string);
        ids
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.registry.read().entities.len()
    }

    /// Returns all registered devices.
    #[must_use]
    pub fn devices(&self) -> Vec<DeviceInfo> {
        self.registry.read().devices.values().cloned().collect()
    }

    fn publish(&self, event: StateEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for EventBus {
    fn register_device(&self, device: &DeviceInfo) -> Result<(), HostError> {
        let (domain, id) = device.identifier();
        let key = (domain.to_string(), id.to_string());

        // Re-registering the same identifier updates it in place
        self.registry.write().devices.insert(key, device.clone());
        tracing::debug!(device = %device, "Device registered");

        self.publish(StateEvent::DeviceRegistered {
            device: device.clone(),
        });
        Ok(())
    }

    fn register(&self, entity: &EntityDescriptor, state: &EntityState) -> Result<(), HostError> {
        let entity_id = entity.entity_id().clone();
        {
            let mut registry = self.registry.write();
            if registry.entities.contains_key(&entity_id) {
                return Err(HostError::AlreadyRegistered(entity_id));
            }
            registry.entities.insert(
                entity_id.clone(),
                RegisteredEntity {
                    descriptor: entity.clone(),
                    state: state.clone(),
                },
            );
        }
        tracing::debug!(entity = %entity_id, %state, "Entity registered");

        self.publish(StateEvent::EntityRegistered {
            entity_id,
            state: state.clone(),
        });
        Ok(())
    }

    fn notify(&self, entity: &EntityId, state: &EntityState) -> Result<(), HostError> {
        {
            let mut registry = self.registry.write();
            let registered = registry
                .entities
                .get_mut(entity)
                .ok_or_else(|| HostError::NotRegistered(entity.clone()))?;
            registered.state = state.clone();
        }
        tracing::trace!(entity = %entity, %state, "Publishing state");

        self.publish(StateEvent::StateChanged {
            entity_id: entity.clone(),
            state: state.clone(),
        });
        Ok(())
    }

    fn unregister(&self, entity: &EntityId) -> Result<(), HostError> {
        self.registry
            .write()
            .entities
            .remove(entity)
            .ok_or_else(|| HostError::NotRegistered(entity.clone()))?;
        tracing::debug!(entity = %entity, "Entity removed");

        self.publish(StateEvent::EntityRemoved {
            entity_id: entity.clone(),
        });
        Ok(())
    }
}
