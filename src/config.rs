// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration configuration.
//!
//! The allowed mood and weather labels are configuration data. Every field
//! has a default, so an empty JSON object yields the stock M.A.C.S. setup.
//!
//! # Examples
//!
//! ```
//! use macs::config::IntegrationConfig;
//!
//! let config = IntegrationConfig::from_json(r#"{ "weathers": { "options": ["none", "snow"] } }"#)
//!     .unwrap();
//! assert_eq!(config.weathers.options, ["none", "snow"]);
//! assert_eq!(config.moods.default, "idle");
//!
//! let config = IntegrationConfig::default()
//!     .with_domain("desk_macs")
//!     .with_moods(["idle", "happy", "sad", "angry"], "idle");
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValueError};
use crate::types::OptionSet;

/// Default integration domain.
pub const DEFAULT_DOMAIN: &str = "macs";

/// Mood labels understood by the stock character card.
pub const DEFAULT_MOODS: [&str; 8] = [
    "idle",
    "bored",
    "listening",
    "thinking",
    "surprised",
    "confused",
    "sleeping",
    "happy",
];

/// Weather labels understood by the stock character card.
pub const DEFAULT_WEATHERS: [&str; 5] = ["none", "rain", "wind", "hot", "cold"];

/// Top-level configuration for an [`Integration`](crate::Integration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrationConfig {
    /// Integration domain, used as the prefix of every unique id.
    pub domain: String,
    /// Identity of the shared device.
    pub device: DeviceConfig,
    /// Allowed mood labels and the initial mood.
    pub moods: SelectorConfig,
    /// Allowed weather labels and the initial weather.
    pub weathers: SelectorConfig,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            device: DeviceConfig::default(),
            moods: SelectorConfig::new(DEFAULT_MOODS, "idle"),
            weathers: SelectorConfig::new(DEFAULT_WEATHERS, "none"),
        }
    }
}

impl IntegrationConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Only the shape is checked here; call [`validate`](Self::validate)
    /// for the semantic rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the integration domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the shared device identity.
    #[must_use]
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    /// Replaces the allowed mood labels.
    #[must_use]
    pub fn with_moods<I, S>(mut self, options: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = SelectorConfig::new(options, default);
        self
    }

    /// Replaces the allowed weather labels.
    #[must_use]
    pub fn with_weathers<I, S>(mut self, options: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weathers = SelectorConfig::new(options, default);
        self
    }

    /// Checks the configuration and returns the validated option sets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] for an empty domain or device id,
    /// and [`ConfigError::InvalidOptions`] for a bad option list or default.
    pub fn validate(&self) -> Result<ValidatedSelectors, ConfigError> {
        if self.domain.is_empty() {
            return Err(ConfigError::EmptyField("domain"));
        }
        if self.device.id.is_empty() {
            return Err(ConfigError::EmptyField("device.id"));
        }

        Ok(ValidatedSelectors {
            moods: self.moods.validate("moods")?,
            weathers: self.weathers.validate("weathers")?,
        })
    }
}

/// Identity of the device grouping the entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Stable id within the domain.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Manufacturer string.
    pub manufacturer: String,
    /// Model string.
    pub model: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            id: "macs".to_string(),
            name: "M.A.C.S.".to_string(),
            manufacturer: "Glyn Davidson".to_string(),
            model: "Mood-Aware Character SVG".to_string(),
        }
    }
}

/// Allowed labels for one selector and its initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Allowed labels, in display order.
    pub options: Vec<String>,
    /// Initial label; defaults to the first option.
    #[serde(default)]
    pub default: String,
}

impl SelectorConfig {
    /// Creates a selector configuration.
    #[must_use]
    pub fn new<I, S>(options: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    fn validate(&self, field: &'static str) -> Result<(OptionSet, String), ConfigError> {
        let invalid = |source| ConfigError::InvalidOptions { field, source };
        let options = OptionSet::new(self.options.iter().cloned()).map_err(invalid)?;

        // An omitted default falls back to the first listed option.
        let default = if self.default.is_empty() {
            options
                .first()
                .map(str::to_string)
                .ok_or_else(|| invalid(ValueError::EmptyOptionSet))?
        } else {
            options.require(&self.default).map_err(invalid)?
        };

        Ok((options, default))
    }
}

/// Option sets and initial values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSelectors {
    /// Mood labels and initial mood.
    pub moods: (OptionSet, String),
    /// Weather labels and initial weather.
    pub weathers: (OptionSet, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let validated = IntegrationConfig::default().validate().unwrap();
        assert_eq!(validated.moods.1, "idle");
        assert_eq!(validated.moods.0.len(), 8);
        assert_eq!(validated.weathers.1, "none");
        assert!(validated.weathers.0.contains("cold"));
    }

    #[test]
    fn empty_json_is_default() {
        let config = IntegrationConfig::from_json("{}").unwrap();
        assert_eq!(config, IntegrationConfig::default());
    }

    #[test]
    fn json_overrides_device() {
        let config = IntegrationConfig::from_json(
            r#"{ "domain": "kiosk", "device": { "name": "Kiosk Face" } }"#,
        )
        .unwrap();
        assert_eq!(config.domain, "kiosk");
        assert_eq!(config.device.name, "Kiosk Face");
        assert_eq!(config.device.id, "macs");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = IntegrationConfig::from_json(r#"{ "colour": "red" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_default_uses_first_option() {
        let config =
            IntegrationConfig::from_json(r#"{ "moods": { "options": ["calm", "happy"] } }"#)
                .unwrap();
        let validated = config.validate().unwrap();
        assert_eq!(validated.moods.1, "calm");
    }

    #[test]
    fn default_outside_options_is_rejected() {
        let config = IntegrationConfig::default().with_moods(["happy", "sad"], "idle");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOptions {
                field: "moods",
                source: ValueError::DefaultNotAllowed(ref d),
            } if d == "idle"
        ));
    }

    #[test]
    fn empty_weather_list_is_rejected() {
        let config = IntegrationConfig::default().with_weathers(Vec::<String>::new(), "none");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOptions {
                field: "weathers",
                source: ValueError::EmptyOptionSet,
            }
        ));
    }

    #[test]
    fn empty_domain_is_rejected() {
        let err = IntegrationConfig::default()
            .with_domain("")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("domain")));
    }
}
