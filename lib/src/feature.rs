//! Morphological features.
//!
//! A [`Feature`] is a single tagged attribute of a wordform, such as
//! `CASE=NOM` or `NUMBER=PLUR`. Matching only ever looks at the
//! `(type, value)` pair, expressed here as a [`FeatureKey`].

use serde::{Deserialize, Serialize};

pub const CASE: &str = "CASE";
pub const NUMBER: &str = "NUMBER";
pub const PERSON: &str = "PERSON";

pub const SINGULAR: &str = "SING";
pub const PLURAL: &str = "PLUR";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,

    pub value: String,

    // Some backend responses carry `enumValue` in place of the identifier.
    #[serde(default, alias = "enumValue")]
    pub full_identifier: String,
}

impl Feature {
    pub fn new<K: Into<String>, V: Into<String>>(kind: K, value: V) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            full_identifier: String::new(),
        }
    }

    pub fn with_identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.full_identifier = identifier.into();
        self
    }

    #[inline]
    pub fn key(&self) -> FeatureKey<'_> {
        FeatureKey::new(&self.kind, &self.value)
    }

    /// Human readable form, e.g. `Case: Nom`.
    pub fn describe(&self) -> String {
        format!("{}: {}", capitalize(&self.kind), capitalize(&self.value))
    }
}

/// Borrowed `(type, value)` pair used as a matching requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeatureKey<'a> {
    pub kind: &'a str,
    pub value: &'a str,
}

impl<'a> FeatureKey<'a> {
    #[inline]
    pub const fn new(kind: &'a str, value: &'a str) -> Self {
        Self { kind, value }
    }

    /// Exact, case-sensitive match on both fields.
    #[inline]
    pub fn matches(&self, feature: &Feature) -> bool {
        feature.kind == self.kind && feature.value == self.value
    }
}

/// Returns `true` when every required key is matched by at least one of
/// `features`. Extra features are ignored and an empty requirement always
/// holds.
pub fn contains_all(features: &[Feature], required: &[FeatureKey<'_>]) -> bool {
    required
        .iter()
        .all(|key| features.iter().any(|feature| key.matches(feature)))
}

/// Joins the readable form of each feature, e.g. `Case: Nom, Number: Plur`.
pub fn describe_all(features: &[Feature]) -> String {
    features
        .iter()
        .map(Feature::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
