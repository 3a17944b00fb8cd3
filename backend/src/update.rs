use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// The remote `version.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(rename = "updateMessage", default)]
    pub update_message: String,
}

/// The message to show, if the remote version differs from ours.
pub fn notice_for(current_version: &str, info: &VersionInfo) -> Option<String> {
    if info.version == current_version {
        None
    } else {
        Some(info.update_message.clone())
    }
}

pub struct UpdateChecker {
    client: reqwest::Client,
    url: Option<String>,
    current_version: String,
}

impl UpdateChecker {
    pub fn new(current_version: impl Into<String>, url: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(CHECK_TIMEOUT).build()?;
        Ok(Self {
            client,
            url,
            current_version: current_version.into(),
        })
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Never fails: anything that goes wrong is logged and reads as
    /// "nothing to announce".
    pub async fn check(&self) -> Option<String> {
        let Some(url) = self.url.as_deref() else {
            debug!("No version url configured, skipping update check");
            return None;
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error checking for updates: {}", e);
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("Could not fetch version information: {}", response.status());
            return None;
        }

        let info: VersionInfo = match response.json().await {
            Ok(info) => info,
            Err(e) => {
                error!("Error reading version information: {}", e);
                return None;
            }
        };

        let notice = notice_for(&self.current_version, &info);
        if notice.is_none() {
            info!("Running the latest version {}", self.current_version);
        } else {
            info!(
                "Version {} available, running {}",
                info.version, self.current_version
            );
        }
        notice
    }
}
