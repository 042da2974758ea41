use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chatanon_config::{Config, MaskingMode};
use chatanon_core::{CleanedMessage, RawMessage, SpeakerMap, load_messages, write_json};
use chatanon_security::{Anonymizer, RedactionInfo, RedactionKind, Redactor};

/// Counters collected over one pipeline pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub records: usize,
    pub written: usize,
    pub skipped_no_content: usize,
    pub skipped_no_sender: usize,
    /// Records whose text was empty after redaction (reactions, blank text)
    pub dropped: usize,
    pub redactions: BTreeMap<RedactionKind, usize>,
}

impl PipelineStats {
    fn record_redactions(&mut self, infos: &[RedactionInfo]) {
        for info in infos {
            *self.redactions.entry(info.redaction_type).or_default() += info.count;
        }
    }

    pub fn redaction_count(&self, kind: RedactionKind) -> usize {
        self.redactions.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct AnonymizeResult {
    pub messages: Vec<CleanedMessage>,
    pub speakers: SpeakerMap,
    pub stats: PipelineStats,
}

/// Redacts and anonymizes a sequence of export records.
pub struct Pipeline {
    redactor: Redactor,
    anonymizer: Anonymizer,
    masking: MaskingMode,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            redactor: Redactor::new(),
            anonymizer: Anonymizer::new(&config.self_real_name, &config.self_label),
            masking: config.masking,
        }
    }

    pub fn process<I>(mut self, records: I) -> AnonymizeResult
    where
        I: IntoIterator<Item = RawMessage>,
    {
        let mut stats = PipelineStats::default();
        let mut messages = Vec::new();

        for (index, raw) in records.into_iter().enumerate() {
            stats.records += 1;

            let Some(text) = raw.text() else {
                tracing::debug!(index, "Skipping record without text content");
                stats.skipped_no_content += 1;
                continue;
            };
            let Some(sender) = raw.sender() else {
                tracing::debug!(index, "Skipping record without sender");
                stats.skipped_no_sender += 1;
                continue;
            };

            let (redacted, infos) = self.redactor.redact(text);
            if redacted.is_empty() {
                tracing::debug!(index, "Dropping record emptied by redaction");
                stats.dropped += 1;
                continue;
            }
            stats.record_redactions(&infos);

            let speaker = self.anonymizer.assign(sender);
            let text = match self.masking {
                MaskingMode::Forward => self.anonymizer.substitute(&redacted),
                MaskingMode::FullDocument => redacted,
            };

            messages.push(CleanedMessage {
                speaker,
                text,
                timestamp_ms: raw.timestamp_ms,
            });
        }

        if self.masking == MaskingMode::FullDocument {
            for message in &mut messages {
                message.text = self.anonymizer.substitute(&message.text);
            }
        }

        stats.written = messages.len();

        AnonymizeResult {
            messages,
            speakers: self.anonymizer.into_speakers(),
            stats,
        }
    }
}

/// Outcome of [`run`]
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: PipelineStats,
    pub speakers: usize,
}

/// Load the export named by `config`, anonymize it, and write both outputs.
///
/// Nothing is written if the input cannot be read or parsed.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let records = load_messages(&config.input_path)
        .with_context(|| format!("Failed to load export {}", config.input_path.display()))?;
    tracing::info!(
        records = records.len(),
        path = %config.input_path.display(),
        "Loaded export"
    );

    let result = Pipeline::new(config).process(records);

    write_json(&config.output_path, &result.messages)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    write_json(&config.mapping_path, &result.speakers)
        .with_context(|| format!("Failed to write {}", config.mapping_path.display()))?;
    tracing::info!(
        messages = result.messages.len(),
        speakers = result.speakers.len(),
        "Wrote anonymized output"
    );

    Ok(RunSummary {
        stats: result.stats,
        speakers: result.speakers.len(),
    })
}
