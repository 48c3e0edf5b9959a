//! The current value store and the settings-update decoder.
//!
//! The store is the host-persisted map of customized values: a snapshot is
//! taken once at the start of a render pass and read-only from then on. Keys
//! absent from the store resolve to the setting's default. The only mutation
//! path is [`ValueStore::apply`], which routes every incoming field through
//! the setting's sanitizer — there is no raw write.
//!
//! # The checkbox-absence rule
//!
//! A [`SettingsUpdate`] mirrors one submission of the settings form. HTTP
//! checkboxes do not submit when unchecked, so for every registered toggle
//! setting, a field *absent* from the update stores the literal `"false"`;
//! a field present stores its submitted value verbatim. Non-toggle settings
//! absent from an update are left untouched. This asymmetry is preserved
//! deliberately — see the tri-state discussion on
//! [`Toggle`](crate::value::Toggle).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::value::ValueKind;

/// Snapshot of persisted setting values (key → sanitized string).
///
/// Created lazily by the host on first customization; an empty store simply
/// resolves everything to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueStore {
    values: BTreeMap<String, String>,
}

impl ValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted `(key, value)` pairs.
    ///
    /// This represents loading a host snapshot, not a mutation path: values
    /// are expected to have been sanitized when they were stored. Anything
    /// that no longer passes its sanitizer is ignored at resolve time.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parses a store snapshot from its JSON persistence form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the store to its JSON persistence form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("string map serialization cannot fail")
    }

    /// The stored value for `key`, if the operator ever customized it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Applies one settings-form submission.
    ///
    /// Every field naming a registered setting is sanitized and stored; the
    /// checkbox-absence rule writes `"false"` for registered toggles missing
    /// from the update; fields naming unknown settings are ignored (traced,
    /// never an error).
    pub fn apply(&mut self, registry: &Registry, update: &SettingsUpdate) {
        for (key, raw) in &update.fields {
            let Some(def) = registry.setting(key) else {
                tracing::debug!(field = key.as_str(), "ignoring update for unknown setting");
                continue;
            };
            let sanitizer = registry
                .sanitizer_for(&def.key)
                .expect("registry built with validated sanitizer names");
            self.values.insert(key.clone(), sanitizer.sanitize(raw));
        }
        for def in registry.settings() {
            if def.kind == ValueKind::Toggle && !update.fields.contains_key(&def.key) {
                self.values.insert(def.key.clone(), "false".to_string());
            }
        }
    }
}

/// One submission of the settings form: field name → raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsUpdate {
    fields: BTreeMap<String, String>,
}

impl SettingsUpdate {
    /// Creates an empty update (which, applied, unchecks every toggle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a submitted field, returning `self` for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Parses an update from its JSON wire form (flat string map).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The submitted fields, for inspection.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
