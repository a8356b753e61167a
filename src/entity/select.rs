// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dropdown entities holding one label of a closed set.

use std::sync::Arc;

use super::{Entity, EntityCapabilities, EntityDescriptor};
use crate::device::DeviceInfo;
use crate::error::{Result, ValueError};
use crate::host::Host;
use crate::state::EntityState;
use crate::types::OptionSet;

/// Result of writing an option to a [`SelectEntity`].
///
/// Rejection is not an error: automations may send stale labels, and the
/// entity simply keeps its current value without notifying the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    /// The option was stored and the host notified.
    Accepted,
    /// The option is not in the allowed set; nothing changed.
    RejectedInvalidOption,
}

impl SelectOutcome {
    /// Returns `true` if the option was stored.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A select entity such as the mood or weather dropdown.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use macs::device::DeviceInfo;
/// use macs::entity::{Entity, SelectEntity};
/// use macs::types::OptionSet;
///
/// let device = Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "Glyn Davidson", "SVG"));
/// let options = OptionSet::new(["idle", "happy"]).unwrap();
/// let mood = SelectEntity::mood("macs", device, options, "idle").unwrap();
///
/// assert_eq!(mood.current_option(), "idle");
/// assert_eq!(mood.id().to_string(), "select.macs_mood");
/// ```
#[derive(Debug, Clone)]
pub struct SelectEntity {
    descriptor: EntityDescriptor,
    options: OptionSet,
    current: String,
}

impl SelectEntity {
    /// Creates a select entity from a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DefaultNotAllowed`] if `initial` is not one of
    /// `options`.
    pub fn new(
        descriptor: EntityDescriptor,
        options: OptionSet,
        initial: &str,
    ) -> std::result::Result<Self, ValueError> {
        let current = options.require(initial)?;
        Ok(Self {
            descriptor,
            options,
            current,
        })
    }

    /// Creates the mood dropdown.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DefaultNotAllowed`] if `initial` is not allowed.
    pub fn mood(
        domain: &str,
        device: Arc<DeviceInfo>,
        options: OptionSet,
        initial: &str,
    ) -> std::result::Result<Self, ValueError> {
        Self::build(domain, "mood", "Mood", "mdi:emoticon", device, options, initial)
    }

    /// Creates the weather dropdown.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DefaultNotAllowed`] if `initial` is not allowed.
    pub fn weather(
        domain: &str,
        device: Arc<DeviceInfo>,
        options: OptionSet,
        initial: &str,
    ) -> std::result::Result<Self, ValueError> {
        Self::build(
            domain,
            "weather",
            "Weather",
            "mdi:weather-partly-cloudy",
            device,
            options,
            initial,
        )
    }

    fn build(
        domain: &str,
        key: &str,
        name: &str,
        icon: &str,
        device: Arc<DeviceInfo>,
        options: OptionSet,
        initial: &str,
    ) -> std::result::Result<Self, ValueError> {
        let descriptor = EntityDescriptor::new(
            domain,
            key,
            name,
            icon,
            device,
            EntityCapabilities::Select {
                options: options.clone(),
            },
        );
        Self::new(descriptor, options, initial)
    }

    /// Returns the selected label.
    #[must_use]
    pub fn current_option(&self) -> &str {
        &self.current
    }

    /// Returns the allowed labels.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Stores `option` if it is allowed and notifies the host.
    ///
    /// Unknown options leave the entity untouched and the host is not
    /// notified. The value is stored before the host is notified, so a
    /// failed notification does not roll it back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`](crate::Error::Host) if the notification fails.
    pub fn select_option(&mut self, option: &str, host: &dyn Host) -> Result<SelectOutcome> {
        let Some(label) = self.options.get(option) else {
            tracing::debug!(
                entity = %self.id(),
                option,
                "Ignoring option outside allowed set"
            );
            return Ok(SelectOutcome::RejectedInvalidOption);
        };

        self.current = label.to_string();
        tracing::debug!(entity = %self.id(), option, "Option selected");

        host.notify(self.id(), &self.state())?;
        Ok(SelectOutcome::Accepted)
    }
}

impl Entity for SelectEntity {
    fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    fn state(&self) -> EntityState {
        EntityState::Select(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, HostError};
    use crate::host::testing::{CountingHost, UnavailableHost};

    fn mood() -> SelectEntity {
        let device = Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "GD", "SVG"));
        let options = OptionSet::new(["idle", "happy", "sad"]).unwrap();
        SelectEntity::mood("macs", device, options, "idle").unwrap()
    }

    #[test]
    fn accepted_option_is_stored_and_notified() {
        let host = CountingHost::default();
        let mut entity = mood();

        let outcome = entity.select_option("happy", &host).unwrap();

        assert_eq!(outcome, SelectOutcome::Accepted);
        assert_eq!(entity.current_option(), "happy");
        assert_eq!(host.notifications(), 1);
    }

    #[test]
    fn unknown_option_is_ignored() {
        let host = CountingHost::default();
        let mut entity = mood();

        let outcome = entity.select_option("ecstatic", &host).unwrap();

        assert_eq!(outcome, SelectOutcome::RejectedInvalidOption);
        assert!(!outcome.is_accepted());
        assert_eq!(entity.current_option(), "idle");
        assert_eq!(host.notifications(), 0);
    }

    #[test]
    fn reselecting_current_option_still_notifies() {
        let host = CountingHost::default();
        let mut entity = mood();

        entity.select_option("idle", &host).unwrap();

        assert_eq!(host.notifications(), 1);
    }

    #[test]
    fn initial_must_be_allowed() {
        let device = Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "GD", "SVG"));
        let options = OptionSet::new(["none", "rain"]).unwrap();
        let err = SelectEntity::weather("macs", device, options, "sunny").unwrap_err();
        assert_eq!(err, ValueError::DefaultNotAllowed("sunny".to_string()));
    }

    #[test]
    fn weather_metadata() {
        let device = Arc::new(DeviceInfo::new("macs", "macs", "M.A.C.S.", "GD", "SVG"));
        let options = OptionSet::new(["none", "rain"]).unwrap();
        let weather = SelectEntity::weather("macs", device, options, "none").unwrap();
        assert_eq!(weather.descriptor().name(), "Weather");
        assert_eq!(weather.descriptor().icon(), "mdi:weather-partly-cloudy");
        assert_eq!(weather.state_json(), serde_json::json!("none"));
    }

    #[test]
    fn failed_notification_keeps_selected_option() {
        let mut entity = mood();

        let err = entity.select_option("sad", &UnavailableHost).unwrap_err();

        assert!(matches!(err, Error::Host(HostError::Unavailable(_))));
        assert_eq!(entity.current_option(), "sad");
    }

    #[test]
    fn rejected_option_skips_failing_host() {
        let mut entity = mood();

        let outcome = entity.select_option("ecstatic", &UnavailableHost).unwrap();

        assert_eq!(outcome, SelectOutcome::RejectedInvalidOption);
        assert_eq!(entity.current_option(), "idle");
    }
}
