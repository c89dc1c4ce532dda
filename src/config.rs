use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_GENRE: &str = "AudioCD";
pub const DEFAULT_DATE: &str = "2025";
pub const DEFAULT_TITLE: &str = "Album_Title";
pub const DEFAULT_PERFORMER: &str = "Artist_Name";

/// Output settings as stored in a JSON config file. Every field is optional;
/// missing ones fall back to the built-in defaults.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub genre: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl OutputConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Option<Self>> {
        if let Some(path) = path {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let config: OutputConfig = serde_json::from_str(&contents)
                .with_context(|| format!("invalid config file {}", path.display()))?;
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: OutputConfig) -> OutputConfig {
        OutputConfig {
            output_path: self.output_path.or(fallback.output_path),
            genre: self.genre.or(fallback.genre),
            date: self.date.or(fallback.date),
            title: self.title.or(fallback.title),
            performer: self.performer.or(fallback.performer),
        }
    }

    pub fn cue_header(&self) -> CueHeader {
        CueHeader {
            genre: self.genre.clone().unwrap_or_else(|| DEFAULT_GENRE.to_string()),
            date: self.date.clone().unwrap_or_else(|| DEFAULT_DATE.to_string()),
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            performer: self
                .performer
                .clone()
                .unwrap_or_else(|| DEFAULT_PERFORMER.to_string()),
        }
    }
}

/// Disc-level metadata written at the top of a cue sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct CueHeader {
    pub genre: String,
    pub date: String,
    pub title: String,
    pub performer: String,
}

impl Default for CueHeader {
    fn default() -> Self {
        OutputConfig::default().cue_header()
    }
}
