//! Flat key/value configuration attached to each index.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Key/value configuration of an index.
///
/// Nested configuration is already flattened into dot separated keys
/// (`index.number_of_shards`, `index.aliases.0`, ...).
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Settings(BTreeMap<String, String>);

impl Settings {
    pub fn new() -> Settings {
        Settings::default()
    }

    /// Access the flat key/value map of these settings.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Read a list of values stored under a key.
    ///
    /// Lists are stored as numbered keys (`key.0`, `key.1`, ...) or as a comma separated value.
    /// Numbered keys take precedence over the plain key when both are set.
    pub fn get_as_array(&self, key: &str) -> Vec<String> {
        let mut values = Vec::new();
        loop {
            let numbered = format!("{}.{}", key, values.len());
            match self.0.get(&numbered) {
                Some(value) => values.push(value.clone()),
                None => break,
            }
        }
        if !values.is_empty() {
            return values;
        }
        match self.0.get(key) {
            None => values,
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Set a key, returning the updated settings to allow chaining.
    pub fn put<K, V>(mut self, key: K, value: V) -> Settings
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Copy of these settings with only the entries accepted by the predicate.
    pub fn retain<F>(&self, mut keep: F) -> Settings
    where
        F: FnMut(&str, &str) -> bool,
    {
        let entries = self
            .0
            .iter()
            .filter(|(key, value)| keep(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Settings(entries)
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Settings(entries)
    }
}

/// Redact index settings before they are exposed to API consumers.
pub trait SettingsFilter: Send + Sync {
    /// Return a copy of the given settings with sensitive entries removed.
    fn filter_settings(&self, settings: &Settings) -> Settings;
}

impl<F> SettingsFilter for F
where
    F: Fn(&Settings) -> Settings + Send + Sync,
{
    fn filter_settings(&self, settings: &Settings) -> Settings {
        self(settings)
    }
}

/// Drop settings whose key matches any of a set of patterns.
///
/// Patterns are exact keys or prefixes terminated by `*` (`index.secret.*`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPatternFilter {
    patterns: Vec<String>,
}

impl KeyPatternFilter {
    pub fn new<I, S>(patterns: I) -> KeyPatternFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        KeyPatternFilter { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn matches(&self, key: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        })
    }
}

impl SettingsFilter for KeyPatternFilter {
    fn filter_settings(&self, settings: &Settings) -> Settings {
        settings.retain(|key, _| !self.matches(key))
    }
}
