//! Pseudonym assignment and name substitution

use chatanon_core::SpeakerMap;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::pseudonym::PseudonymPolicy;

/// Compiled patterns that rewrite one real name to its pseudonym.
///
/// The full name is matched as a literal substring, then each
/// whitespace-separated part is matched as a whole word. All matching is
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pseudonym: String,
    patterns: Vec<Regex>,
}

impl NameMatcher {
    /// Returns `None` for a blank name.
    pub fn new(real_name: &str, pseudonym: &str) -> Option<Self> {
        if real_name.trim().is_empty() {
            return None;
        }

        let full = regex::escape(real_name);
        let parts = real_name
            .split_whitespace()
            .map(|part| format!(r"\b{}\b", regex::escape(part)));

        let patterns = std::iter::once(full)
            .chain(parts)
            .filter_map(|pattern| {
                match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                    Ok(re) => Some(re),
                    Err(err) => {
                        tracing::warn!(error = %err, "Skipping name pattern");
                        None
                    }
                }
            })
            .collect();

        Some(Self {
            pseudonym: pseudonym.to_string(),
            patterns,
        })
    }

    pub fn pseudonym(&self) -> &str {
        &self.pseudonym
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.patterns {
            result = pattern
                .replace_all(&result, NoExpand(self.pseudonym.as_str()))
                .into_owned();
        }
        result
    }
}

/// Replace every known real name in `text` with its pseudonym, using the
/// mapping in first-assigned order.
pub fn substitute_names(text: &str, speakers: &SpeakerMap) -> String {
    speakers
        .iter()
        .filter_map(|(real_name, pseudonym)| NameMatcher::new(real_name, pseudonym))
        .fold(text.to_string(), |acc, matcher| matcher.apply(&acc))
}

/// Owns the speaker mapping for one run and the name matchers built from it.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    policy: PseudonymPolicy,
    speakers: SpeakerMap,
    matchers: Vec<NameMatcher>,
}

impl Anonymizer {
    pub fn new(self_real_name: impl Into<String>, self_label: impl Into<String>) -> Self {
        Self {
            policy: PseudonymPolicy::new(self_real_name, self_label),
            speakers: SpeakerMap::new(),
            matchers: Vec::new(),
        }
    }

    /// Pseudonym for `real_name`, assigned on first encounter
    pub fn assign(&mut self, real_name: &str) -> String {
        let (pseudonym, inserted) = self.policy.assign(&mut self.speakers, real_name);
        let pseudonym = pseudonym.to_string();

        if inserted {
            tracing::debug!(pseudonym = %pseudonym, "Assigned pseudonym");
            if let Some(matcher) = NameMatcher::new(real_name, &pseudonym) {
                self.matchers.push(matcher);
            }
        }

        pseudonym
    }

    /// Rewrite names known so far inside `text`
    pub fn substitute(&self, text: &str) -> String {
        self.matchers
            .iter()
            .fold(text.to_string(), |acc, matcher| matcher.apply(&acc))
    }

    pub fn speakers(&self) -> &SpeakerMap {
        &self.speakers
    }

    pub fn into_speakers(self) -> SpeakerMap {
        self.speakers
    }
}
