use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// Real sender name to pseudonym, in first-assignment order.
///
/// Entries are only ever added; an existing entry is never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerMap {
    entries: IndexMap<String, String>,
}

impl SpeakerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, real_name: &str) -> Option<&str> {
        self.entries.get(real_name).map(String::as_str)
    }

    pub fn contains(&self, real_name: &str) -> bool {
        self.entries.contains_key(real_name)
    }

    /// Return the pseudonym for `real_name`, calling `assign` to create one
    /// only if the name is not present yet.
    ///
    /// The second element is `true` when a new entry was inserted.
    pub fn get_or_insert_with<F>(&mut self, real_name: &str, assign: F) -> (&str, bool)
    where
        F: FnOnce() -> String,
    {
        match self.entries.entry(real_name.to_string()) {
            Entry::Occupied(entry) => (entry.into_mut().as_str(), false),
            Entry::Vacant(entry) => (entry.insert(assign()).as_str(), true),
        }
    }

    /// Iterate `(real_name, pseudonym)` pairs, first-assigned first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
