//! Reaction filtering and PII masking

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading character of mis-decoded emoji in message exports.
const REACTION_MARKER: char = '\u{f0}';

const REACTION_PATTERN: &str = r"(?i)^(reacted|liked|loved|laughed|wow'ed|wowed|sad|angry)\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionKind {
    Email,
    Phone,
    Link,
}

impl RedactionKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            RedactionKind::Email => "[email_removed]",
            RedactionKind::Phone => "[phone_removed]",
            RedactionKind::Link => "[link_removed]",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            RedactionKind::Email => r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            RedactionKind::Phone => r"\b\+?\d[\d\s\-().]{6,}\b",
            RedactionKind::Link => r"https?://\S+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: RedactionKind,
    pub count: usize,
}

/// Redaction engine for chat message text
pub struct Redactor {
    reaction: Option<Regex>,
    patterns: Vec<(RedactionKind, Regex)>,
}

impl Redactor {
    pub fn new() -> Self {
        let reaction = compile("reaction", REACTION_PATTERN);

        // Order matters: emails and phones are masked before links
        let patterns = [RedactionKind::Email, RedactionKind::Phone, RedactionKind::Link]
            .into_iter()
            .filter_map(|kind| compile(kind.placeholder(), kind.pattern()).map(|re| (kind, re)))
            .collect();

        Self { reaction, patterns }
    }

    /// Check whether trimmed text is a reaction notification
    pub fn is_reaction(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        if lower.contains("reacted") && lower.contains("message") {
            return true;
        }
        if text.starts_with(REACTION_MARKER) {
            return true;
        }
        self.reaction.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Redact message text.
    ///
    /// An empty result means the message should be dropped.
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let trimmed = content.trim();
        if trimmed.is_empty() || self.is_reaction(trimmed) {
            return (String::new(), Vec::new());
        }

        let mut result = trimmed.to_string();
        let mut redactions = Vec::new();

        for (kind, pattern) in &self.patterns {
            let count = pattern.find_iter(&result).count();

            if count > 0 {
                result = pattern
                    .replace_all(&result, kind.placeholder())
                    .into_owned();

                redactions.push(RedactionInfo {
                    redaction_type: *kind,
                    count,
                });
            }
        }

        (result.trim().to_string(), redactions)
    }

    /// Redact message text, discarding redaction details
    pub fn redact_text(&self, content: &str) -> String {
        self.redact(content).0
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(pattern = name, error = %err, "Disabling redaction pattern");
            None
        }
    }
}
