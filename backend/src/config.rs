use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::PageView;

fn default_yes_growth() -> f32 {
    1.5
}

fn default_yes_destination() -> String {
    "yes.html".to_string()
}

fn default_debounce_ms() -> u32 {
    300
}

/// Where the published page announces new versions.
pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/ivysone/Will-you-be-my-Valentine-/main/version.json";

fn default_version_url() -> Option<String> {
    Some(DEFAULT_VERSION_URL.to_string())
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Contents of `page.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Lyric file names, resolved against `LYRICS_DIR`.
    #[serde(default)]
    pub lyrics: Vec<String>,
    /// Carousel messages, oldest first.
    #[serde(default)]
    pub messages: Vec<String>,
    /// What the "no" button says, press after press.
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default = "default_yes_growth")]
    pub yes_growth: f32,
    #[serde(default = "default_yes_destination")]
    pub yes_destination: String,
    #[serde(default = "default_debounce_ms")]
    pub carousel_debounce_ms: u32,
    #[serde(default = "default_version")]
    pub current_version: String,
    /// `null` turns the update check off.
    #[serde(default = "default_version_url")]
    pub version_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lyrics: Vec::new(),
            messages: Vec::new(),
            prompts: Vec::new(),
            yes_growth: default_yes_growth(),
            yes_destination: default_yes_destination(),
            carousel_debounce_ms: default_debounce_ms(),
            current_version: default_version(),
            version_url: default_version_url(),
        }
    }
}

impl PageConfig {
    pub fn from_config(config_dir: &str) -> Result<Self> {
        let page_path = format!("{config_dir}/page.json");
        info!("Loading page config from: {}", page_path);

        let content = std::fs::read_to_string(&page_path)
            .with_context(|| format!("reading {page_path}"))?;
        Self::from_json(&content).with_context(|| format!("loading {page_path}"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.yes_growth.is_finite() || self.yes_growth <= 1.0 {
            return Err(anyhow!(
                "yes_growth must be greater than 1, got {}",
                self.yes_growth
            ));
        }
        if self.yes_destination.trim().is_empty() {
            return Err(anyhow!("yes_destination must not be empty"));
        }
        if let Some(name) = self.lyrics.iter().find(|name| !is_plain_file_name(name)) {
            return Err(anyhow!("lyric resource {name:?} must be a plain file name"));
        }
        Ok(())
    }

    /// What the page script needs to wire up its widgets.
    pub fn view(&self) -> PageView {
        PageView {
            messages: self.messages.clone(),
            prompts: self.prompts.clone(),
            yes_growth: self.yes_growth,
            yes_destination: self.yes_destination.clone(),
            carousel_debounce_ms: self.carousel_debounce_ms,
            lyric_count: self.lyrics.len(),
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
