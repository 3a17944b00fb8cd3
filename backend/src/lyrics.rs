use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One loaded lyric file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricSheet {
    pub index: usize,
    pub name: String,
    pub lines: Vec<String>,
}

/// The ordered lyric files the page cycles through.
#[derive(Debug, Clone)]
pub struct LyricCatalog {
    dir: PathBuf,
    resources: Vec<String>,
}

impl LyricCatalog {
    pub fn new(dir: impl Into<PathBuf>, resources: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            resources,
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Wraps `index` onto the list.
    pub fn resource(&self, index: usize) -> Option<(usize, &str)> {
        if self.resources.is_empty() {
            return None;
        }
        let index = index % self.resources.len();
        Some((index, self.resources[index].as_str()))
    }

    /// Reads the resource at `index`. An unreadable file gives an empty
    /// sheet so the page keeps animating.
    pub async fn load(&self, index: usize) -> Option<LyricSheet> {
        let (index, name) = self.resource(index)?;
        let path = self.dir.join(name);
        let lines = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content.lines().map(str::to_owned).collect(),
            Err(e) => {
                warn!("Could not load lyrics from {}: {}", path.display(), e);
                Vec::new()
            }
        };
        debug!("Loaded {} lines from {}", lines.len(), name);
        Some(LyricSheet {
            index,
            name: name.to_owned(),
            lines,
        })
    }
}
