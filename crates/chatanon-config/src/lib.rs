use anyhow::Context;
use chatanon_security::is_friend_label;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Run configuration for chatanon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_mapping_path")]
    pub mapping_path: PathBuf,

    /// Sender name that is labelled with `self_label` (case-insensitive)
    #[serde(default = "default_self_real_name")]
    pub self_real_name: String,

    #[serde(default = "default_self_label")]
    pub self_label: String,

    #[serde(default)]
    pub masking: MaskingMode,
}

/// Which names are masked in a message's text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingMode {
    /// Only names of senders seen up to and including the current message
    #[default]
    Forward,
    /// Names of every sender in the export, collected in a first pass
    FullDocument,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            mapping_path: default_mapping_path(),
            self_real_name: default_self_real_name(),
            self_label: default_self_label(),
            masking: MaskingMode::default(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("messages.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("cleaned_messages.json")
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from("name_mapping.json")
}

fn default_self_real_name() -> String {
    "Your name".to_string()
}

fn default_self_label() -> String {
    "Me".to_string()
}

impl Config {
    /// Load config from the default location, or defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.self_label.trim().is_empty() {
            anyhow::bail!("self_label must not be empty");
        }
        if is_friend_label(&self.self_label) {
            anyhow::bail!(
                "self_label '{}' collides with the Friend_<letters> pseudonyms",
                self.self_label
            );
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "chatanon", "chatanon") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.chatanon/config.toml")
        }
    }
}
