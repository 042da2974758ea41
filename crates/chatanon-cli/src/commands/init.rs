use anyhow::Result;
use chatanon_config::Config;
use std::path::PathBuf;

pub fn handle(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(Config::config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save(&path)?;

    println!("✓ Wrote default config to {}", path.display());
    println!("  Set self_real_name to your own name in the export before running.");

    Ok(())
}
