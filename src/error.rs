// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `macs` library.
//!
//! Writes to the entities themselves never fail: an unknown selector option
//! is reported through [`SelectOutcome`](crate::entity::SelectOutcome) and a
//! brightness value is always clamped. Errors only come from configuration
//! validation, the host capability, and routing host calls to entities.

use thiserror::Error;

use crate::entity::{EntityId, Platform};

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The integration configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The host rejected a registration or notification.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// No entity with this id belongs to the integration.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// The entity exists but does not support the requested operation.
    #[error("entity {entity} is a {actual} entity, expected {expected}")]
    WrongPlatform {
        /// The addressed entity.
        entity: EntityId,
        /// The platform the operation requires.
        expected: Platform,
        /// The platform of the addressed entity.
        actual: Platform,
    },
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An option set was built without any labels.
    #[error("option set is empty")]
    EmptyOptionSet,

    /// An option label is the empty string.
    #[error("option label must not be empty")]
    EmptyOption,

    /// The same label appears more than once.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    /// A default option is not a member of its set.
    #[error("default option {0:?} is not in the allowed set")]
    DefaultNotAllowed(String),

    /// A platform name other than `select` or `number`.
    #[error("unknown platform: {0}")]
    InvalidPlatform(String),

    /// An entity id not of the form `<platform>.<object_id>`.
    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// An allowed-value list failed validation.
    #[error("invalid {field}: {source}")]
    InvalidOptions {
        /// The offending configuration field.
        field: &'static str,
        /// The underlying validation failure.
        #[source]
        source: ValueError,
    },
}

/// Errors reported by a [`Host`](crate::host::Host) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host already has an entity registered under this id.
    #[error("entity already registered: {0}")]
    AlreadyRegistered(EntityId),

    /// The host does not know the entity being notified.
    #[error("entity not registered: {0}")]
    NotRegistered(EntityId),

    /// The host is shutting down or otherwise unavailable.
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
