// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration lifecycle: setup, host call routing, unload.

use std::sync::Arc;

use crate::config::IntegrationConfig;
use crate::device::DeviceInfo;
use crate::entity::{Entity, EntityId, NumberEntity, Platform, SelectEntity, SelectOutcome};
use crate::error::{Error, HostError, Result};
use crate::host::Host;
use crate::types::Brightness;

/// The M.A.C.S. integration: one device with a mood dropdown, a weather
/// dropdown and a brightness slider.
///
/// The three entities are independent. None of them reacts to another.
///
/// # Examples
///
/// ```
/// use macs::config::IntegrationConfig;
/// use macs::entity::SelectOutcome;
/// use macs::event::EventBus;
/// use macs::Integration;
///
/// let mut macs = Integration::setup(&IntegrationConfig::default(), EventBus::new())?;
/// assert_eq!(macs.mood(), "idle");
/// assert_eq!(macs.weather(), "none");
/// assert_eq!(macs.brightness().value(), 100.0);
///
/// assert_eq!(macs.select_mood("happy")?, SelectOutcome::Accepted);
/// assert_eq!(macs.select_mood("ecstatic")?, SelectOutcome::RejectedInvalidOption);
/// assert_eq!(macs.mood(), "happy");
///
/// assert_eq!(macs.set_brightness(150.0)?.value(), 100.0);
/// # Ok::<(), macs::Error>(())
/// ```
#[derive(Debug)]
pub struct Integration<H: Host> {
    host: H,
    device: Arc<DeviceInfo>,
    mood: SelectEntity,
    weather: SelectEntity,
    brightness: NumberEntity,
}

impl<H: Host> Integration<H> {
    /// Validates `config`, creates the entities with their defaults and
    /// registers the device and then each entity with `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid configuration and
    /// [`Error::Host`] if the host refuses a registration. Entities
    /// registered before the refusal are unregistered again.
    pub fn setup(config: &IntegrationConfig, host: H) -> Result<Self> {
        let selectors = config.validate()?;
        let domain = config.domain.as_str();
        let device = DeviceInfo::shared(domain, &config.device);

        let (mood_options, mood_default) = selectors.moods;
        let (weather_options, weather_default) = selectors.weathers;
        let mood = SelectEntity::mood(domain, Arc::clone(&device), mood_options, &mood_default)?;
        let weather = SelectEntity::weather(
            domain,
            Arc::clone(&device),
            weather_options,
            &weather_default,
        )?;
        let brightness = NumberEntity::brightness(domain, Arc::clone(&device));

        host.register_device(&device)?;
        let integration = Self {
            host,
            device,
            mood,
            weather,
            brightness,
        };
        let mut registered = Vec::with_capacity(3);
        for entity in integration.entities() {
            if let Err(err) = integration
                .host
                .register(entity.descriptor(), &entity.state())
            {
                tracing::warn!(
                    entity = %entity.id(),
                    error = %err,
                    "Registration refused, rolling back"
                );
                // Rollback failures are logged; the registration error wins
                let _ = integration.unregister_each(&registered);
                return Err(err.into());
            }
            registered.push(entity.id());
        }

        tracing::info!(
            domain,
            device = %integration.device,
            entities = integration.entities().len(),
            "Integration set up"
        );
        Ok(integration)
    }

    /// Routes a host "select option" call to the addressed entity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if no entity has this id,
    /// [`Error::WrongPlatform`] if it is not a select entity, and
    /// [`Error::Host`] if publishing the new state fails.
    pub fn select_option(&mut self, entity: &EntityId, option: &str) -> Result<SelectOutcome> {
        if entity == self.mood.id() {
            self.mood.select_option(option, &self.host)
        } else if entity == self.weather.id() {
            self.weather.select_option(option, &self.host)
        } else {
            Err(self.misrouted(entity, Platform::Select))
        }
    }

    /// Routes a host "set value" call to the addressed entity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if no entity has this id,
    /// [`Error::WrongPlatform`] if it is not a number entity, and
    /// [`Error::Host`] if publishing the new state fails.
    pub fn set_value(&mut self, entity: &EntityId, value: f64) -> Result<Brightness> {
        if entity == self.brightness.id() {
            self.brightness.set_native_value(value, &self.host)
        } else {
            Err(self.misrouted(entity, Platform::Number))
        }
    }

    /// Selects a mood.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] if publishing the new state fails.
    pub fn select_mood(&mut self, option: &str) -> Result<SelectOutcome> {
        self.mood.select_option(option, &self.host)
    }

    /// Selects a weather.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] if publishing the new state fails.
    pub fn select_weather(&mut self, option: &str) -> Result<SelectOutcome> {
        self.weather.select_option(option, &self.host)
    }

    /// Sets the brightness, clamped to 0-100.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] if publishing the new state fails.
    pub fn set_brightness(&mut self, value: f64) -> Result<Brightness> {
        self.brightness.set_native_value(value, &self.host)
    }

    /// Current mood.
    #[must_use]
    pub fn mood(&self) -> &str {
        self.mood.current_option()
    }

    /// Current weather.
    #[must_use]
    pub fn weather(&self) -> &str {
        self.weather.current_option()
    }

    /// Current brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness.value()
    }

    /// The mood dropdown.
    #[must_use]
    pub fn mood_entity(&self) -> &SelectEntity {
        &self.mood
    }

    /// The weather dropdown.
    #[must_use]
    pub fn weather_entity(&self) -> &SelectEntity {
        &self.weather
    }

    /// The brightness slider.
    #[must_use]
    pub fn brightness_entity(&self) -> &NumberEntity {
        &self.brightness
    }

    /// The device shared by every entity.
    #[must_use]
    pub fn device(&self) -> &Arc<DeviceInfo> {
        &self.device
    }

    /// All entities in registration order.
    #[must_use]
    pub fn entities(&self) -> [&dyn Entity; 3] {
        [&self.mood, &self.weather, &self.brightness]
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&dyn Entity> {
        self.entities().into_iter().find(|entity| entity.id() == id)
    }

    /// The host this integration reports to.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Asks the host to remove every entity and hands the host back.
    ///
    /// Every entity is attempted even if an earlier removal fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] with the first removal failure.
    pub fn unload(self) -> Result<H> {
        let removed = {
            let ids: Vec<&EntityId> = self.entities().into_iter().map(|e| e.id()).collect();
            self.unregister_each(&ids)
        };
        removed?;

        tracing::info!(device = %self.device, "Integration unloaded");
        Ok(self.host)
    }

    fn unregister_each(&self, ids: &[&EntityId]) -> std::result::Result<(), HostError> {
        let mut first_error = None;
        for id in ids {
            if let Err(err) = self.host.unregister(id) {
                tracing::warn!(entity = %id, error = %err, "Failed to unregister entity");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn misrouted(&self, entity: &EntityId, expected: Platform) -> Error {
        match self.entity(entity) {
            Some(found) => Error::WrongPlatform {
                entity: entity.clone(),
                expected,
                actual: found.descriptor().platform(),
            },
            None => Error::UnknownEntity(entity.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::CountingHost;

    fn setup() -> Integration<CountingHost> {
        Integration::setup(&IntegrationConfig::default(), CountingHost::default()).unwrap()
    }

    #[test]
    fn defaults_after_setup() {
        let macs = setup();
        assert_eq!(macs.mood(), "idle");
        assert_eq!(macs.weather(), "none");
        assert_eq!(macs.brightness(), Brightness::MAX);
        assert_eq!(macs.host().notifications(), 0);
    }

    #[test]
    fn routes_by_entity_id() {
        let mut macs = setup();
        let weather: EntityId = "select.macs_weather".parse().unwrap();
        let brightness: EntityId = "number.macs_brightness".parse().unwrap();

        assert!(macs.select_option(&weather, "rain").unwrap().is_accepted());
        macs.set_value(&brightness, 10.0).unwrap();

        assert_eq!(macs.weather(), "rain");
        assert_eq!(macs.mood(), "idle");
        assert!((macs.brightness().value() - 10.0).abs() < f64::EPSILON);
        assert_eq!(macs.host().notifications(), 2);
    }

    #[test]
    fn wrong_platform_is_reported() {
        let mut macs = setup();
        let brightness: EntityId = "number.macs_brightness".parse().unwrap();

        let err = macs.select_option(&brightness, "idle").unwrap_err();

        assert!(matches!(
            err,
            Error::WrongPlatform {
                expected: Platform::Select,
                actual: Platform::Number,
                ..
            }
        ));
    }

    #[test]
    fn unknown_entity_is_reported() {
        let mut macs = setup();
        let other = EntityId::new(Platform::Number, "macs_volume");

        let err = macs.set_value(&other, 1.0).unwrap_err();

        assert!(matches!(err, Error::UnknownEntity(ref id) if *id == other));
    }

    #[test]
    fn invalid_config_fails_setup() {
        let config = IntegrationConfig::default().with_moods(["happy"], "idle");
        let err = Integration::setup(&config, CountingHost::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn entities_share_one_device() {
        let macs = setup();
        for entity in macs.entities() {
            assert!(Arc::ptr_eq(entity.descriptor().device(), macs.device()));
        }
    }
}
