//! UMH Settings System
//!
//! Provides console settings with persistence, including:
//! - Admin table settings (page size, mock catalog size)
//! - Assistant settings (provider, model, API key source, timeouts)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod settings_file;

pub use settings_file::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UmhSettings {
    pub admin: AdminSettings,
    pub assistant: AssistantSettings,
}

impl UmhSettings {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn settings_path() -> Result<PathBuf> {
        config_dir().map(|dir| dir.join("settings.json"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Rows per table page
    pub page_size: usize,
    /// Mock content records generated at startup
    pub content_count: usize,
    /// Mock accounts generated at startup
    pub account_count: usize,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            content_count: 125,
            account_count: 145,
        }
    }
}

/// Chat backend for the concierge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssistantProvider {
    /// Google Gemini `generateContent` API
    #[default]
    Gemini,
    /// Canned reply after a short delay, no network
    Offline,
}

impl AssistantProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Offline => "Offline",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Gemini, Self::Offline]
    }

    /// Returns the default model for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.5-flash",
            Self::Offline => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub provider: AssistantProvider,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Delay before the offline provider answers
    pub offline_delay_ms: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            provider: AssistantProvider::Gemini,
            model: AssistantProvider::Gemini.default_model().to_string(),
            api_key_env: "API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
            offline_delay_ms: 1000,
        }
    }
}

impl AssistantSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn offline_delay(&self) -> Duration {
        Duration::from_millis(self.offline_delay_ms)
    }

    /// API key from the configured environment variable, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
