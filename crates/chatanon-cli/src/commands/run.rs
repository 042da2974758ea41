use anyhow::Result;
use chatanon_config::{Config, MaskingMode};
use chatanon_security::RedactionKind;

use crate::cli::RunArgs;

pub fn handle(args: RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let summary = chatanon_engine::run(&config)?;
    let stats = &summary.stats;

    println!(
        "✓ Saved {} messages to {}",
        stats.written,
        config.output_path.display()
    );
    println!(
        "✓ Name mapping saved to {} ({} speakers)",
        config.mapping_path.display(),
        summary.speakers
    );
    println!(
        "  Redacted: {} emails, {} phone numbers, {} links",
        stats.redaction_count(RedactionKind::Email),
        stats.redaction_count(RedactionKind::Phone),
        stats.redaction_count(RedactionKind::Link)
    );
    println!(
        "  Skipped: {} without text, {} without sender, {} reactions or blank",
        stats.skipped_no_content, stats.skipped_no_sender, stats.dropped
    );

    Ok(())
}

fn resolve_config(args: RunArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(mapping) = args.mapping {
        config.mapping_path = mapping;
    }
    if let Some(self_name) = args.self_name {
        config.self_real_name = self_name;
    }
    if let Some(self_label) = args.self_label {
        config.self_label = self_label;
    }
    if args.full_document {
        config.masking = MaskingMode::FullDocument;
    }

    Ok(config)
}
