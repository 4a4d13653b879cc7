//! Localized string lookup.
//!
//! The core only needs a handful of labels and messages. [`StringProvider`]
//! is the seam: [`DefaultStrings`] carries the English table and
//! [`OverrideStrings`] layers per-key replacements on top of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every string the core asks for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    /// Bold label before `"{height} / {mass}"`.
    HeightMass,
    /// Bold label before the grouped cost.
    Cost,
    /// Bold label before `"({x},{y})"`.
    LastPosition,
    /// Error cause when the detail load fails.
    DetailUnavailable,
    /// Error cause when the catalogue comes back empty-handed.
    ListUnavailable,
}

pub trait StringProvider: Send + Sync {
    fn get(&self, key: StringKey) -> String;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrings;

impl DefaultStrings {
    pub const fn text(key: StringKey) -> &'static str {
        match key {
            StringKey::HeightMass => "Height/Mass: ",
            StringKey::Cost => "Cost: ",
            StringKey::LastPosition => "Last Position: ",
            StringKey::DetailUnavailable => "could not retrieve detail",
            StringKey::ListUnavailable => "could not retrieve satellites",
        }
    }
}

impl StringProvider for DefaultStrings {
    fn get(&self, key: StringKey) -> String {
        Self::text(key).to_owned()
    }
}

/// Per-key overrides with a fallback to [`DefaultStrings`].
#[derive(Debug, Clone, Default)]
pub struct OverrideStrings {
    overrides: HashMap<StringKey, String>,
}

impl OverrideStrings {
    pub fn new(overrides: HashMap<StringKey, String>) -> Self {
        Self { overrides }
    }

    /// Build from `snake_case` key names, returning the names that did not
    /// match any [`StringKey`].
    pub fn from_named<I, K, V>(entries: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut overrides = HashMap::new();
        let mut unknown = Vec::new();
        for (name, text) in entries {
            match name.as_ref().parse::<StringKey>() {
                Ok(key) => {
                    overrides.insert(key, text.into());
                }
                Err(_) => unknown.push(name.as_ref().to_owned()),
            }
        }
        (Self { overrides }, unknown)
    }
}

impl StringProvider for OverrideStrings {
    fn get(&self, key: StringKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| DefaultStrings::text(key).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_key_has_a_default() {
        for key in StringKey::iter() {
            assert!(!DefaultStrings.get(key).is_empty(), "{key} has no text");
        }
    }

    #[test]
    fn overrides_fall_back_to_defaults() {
        let (strings, unknown) =
            OverrideStrings::from_named([("cost", "Kosten: "), ("bogus", "x")]);
        assert_eq!(unknown, vec!["bogus".to_owned()]);
        assert_eq!(strings.get(StringKey::Cost), "Kosten: ");
        assert_eq!(
            strings.get(StringKey::HeightMass),
            DefaultStrings::text(StringKey::HeightMass)
        );
    }

    #[test]
    fn keys_round_trip_through_names() {
        assert_eq!(StringKey::LastPosition.as_ref(), "last_position");
        assert_eq!(
            "detail_unavailable".parse::<StringKey>().ok(),
            Some(StringKey::DetailUnavailable)
        );
    }
}
