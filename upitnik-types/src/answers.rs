use std::collections::BTreeMap;

use serde::Serialize;

/// Collected answers, keyed by question id.
///
/// Values are kept as the raw strings the user entered — numbers are not
/// coerced. This map is exactly what gets serialized as the prediction
/// request body: a flat JSON object with one key per question id.
///
/// Answers persist across navigation within a session: revisiting a section
/// pre-fills from here, and entries for sections navigated away from are
/// preserved, not cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<String, String>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Store an answer for a question id, replacing any previous value.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the stored answer for a question id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Check if an answer exists for a question id.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of stored answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
