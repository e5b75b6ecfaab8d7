//! Terminal configuration loaded from `termfolio.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Top-level terminal configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Optional content table file (`.toml` or `.json`). `None` selects the
    /// built-in sample content.
    #[serde(default)]
    pub content: Option<PathBuf>,
}

/// Prompt decoration shown by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptConfig {
    /// Visitor name shown before the `@`.
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

/// Timing of the `?` reference overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    /// Seconds before the overlay closes by itself.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
    /// Milliseconds after opening during which key presses are ignored.
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,
}

fn default_user() -> String {
    "guest".to_string()
}
fn default_host() -> String {
    "portfolio".to_string()
}
fn default_symbol() -> String {
    "$".to_string()
}
fn default_duration_secs() -> u32 {
    15
}
fn default_grace_ms() -> u64 {
    100
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            symbol: default_symbol(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            grace_ms: default_grace_ms(),
        }
    }
}

impl OverlayConfig {
    /// Grace period as a `Duration`.
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
            overlay: OverlayConfig::default(),
            content: None,
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// A relative `content` path is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if let (Some(content), Some(dir)) = (config.content.as_mut(), path.parent())
            && content.is_relative()
        {
            *content = dir.join(&*content);
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.overlay.duration_secs == 0 {
            return Err(TermfolioError::Config(
                "overlay.duration_secs must be at least 1".to_string(),
            ));
        }
        if self.prompt.host.trim().is_empty() {
            return Err(TermfolioError::Config(
                "prompt.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
