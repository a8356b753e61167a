// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed set of labels a selector may hold.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// An ordered, non-empty set of distinct selector labels.
///
/// Order is preserved because the host shows the options in this order.
/// Membership is exact: no trimming or case folding is applied.
///
/// # Examples
///
/// ```
/// use macs::types::OptionSet;
///
/// let weathers = OptionSet::new(["none", "rain", "wind"]).unwrap();
/// assert!(weathers.contains("rain"));
/// assert!(!weathers.contains("Rain"));
/// assert_eq!(weathers.len(), 3);
///
/// assert!(OptionSet::new(["rain", "rain"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    /// Creates an option set from a list of labels.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyOptionSet`] for an empty list,
    /// [`ValueError::EmptyOption`] for an empty label, and
    /// [`ValueError::DuplicateOption`] when a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ValueError::EmptyOptionSet);
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.is_empty() {
                return Err(ValueError::EmptyOption);
            }
            if !seen.insert(label.as_str()) {
                return Err(ValueError::DuplicateOption(label.clone()));
            }
        }

        Ok(Self(labels))
    }

    /// Returns `true` if `option` is one of the allowed labels.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|label| label == option)
    }

    /// Returns the label matching `option`, if allowed.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|label| *label == option)
            .map(String::as_str)
    }

    /// Returns the first label in display order.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Checks that `default` belongs to the set and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DefaultNotAllowed`] if it does not.
    pub fn require(&self, default: &str) -> Result<String, ValueError> {
        self.get(default)
            .map(str::to_string)
            .ok_or_else(|| ValueError::DefaultNotAllowed(default.to_string()))
    }

    /// Iterates the labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the labels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no labels, which construction rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        let set = OptionSet::new(["idle", "happy", "bored"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["idle", "happy", "bored"]);
    }

    #[test]
    fn rejects_empty_set() {
        let labels: [&str; 0] = [];
        assert_eq!(OptionSet::new(labels), Err(ValueError::EmptyOptionSet));
    }

    #[test]
    fn rejects_empty_label() {
        assert_eq!(OptionSet::new(["idle", ""]), Err(ValueError::EmptyOption));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            OptionSet::new(["idle", "happy", "idle"]),
            Err(ValueError::DuplicateOption("idle".to_string()))
        );
    }

    #[test]
    fn membership_is_exact() {
        let set = OptionSet::new(["happy"]).unwrap();
        assert!(set.contains("happy"));
        assert!(!set.contains("HAPPY"));
        assert!(!set.contains(" happy"));
        assert!(!set.contains(""));
    }

    #[test]
    fn require_default() {
        let set = OptionSet::new(["none", "rain"]).unwrap();
        assert_eq!(set.require("none").unwrap(), "none");
        assert_eq!(
            set.require("sunny"),
            Err(ValueError::DefaultNotAllowed("sunny".to_string()))
        );
    }

    #[test]
    fn first_follows_display_order() {
        let set = OptionSet::new(["sleeping", "idle"]).unwrap();
        assert_eq!(set.first(), Some("sleeping"));
    }

    #[test]
    fn display_lists_labels() {
        let set = OptionSet::new(["none", "rain"]).unwrap();
        assert_eq!(set.to_string(), "[none, rain]");
    }
}
