//! Dashboard configuration at ~/.config/aievents/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CONFERENCES_SOURCE, DEFAULT_HACKATHONS_SOURCE};
use crate::error::{EventsError, EventsResult};
use crate::event::EventKind;
use crate::source::Source;

static DEFAULT_DATA_DIR: &str = "~/ai-events";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_hackathons_source() -> String {
    DEFAULT_HACKATHONS_SOURCE.to_string()
}

fn default_conferences_source() -> String {
    DEFAULT_CONFERENCES_SOURCE.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory that relative sources are resolved against
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Path or URL of the hackathons CSV
    #[serde(default = "default_hackathons_source")]
    pub hackathons_source: String,

    /// Path or URL of the conferences CSV
    #[serde(default = "default_conferences_source")]
    pub conferences_source: String,

    /// Where favorites are kept (defaults to the platform data directory)
    pub storage_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            hackathons_source: default_hackathons_source(),
            conferences_source: default_conferences_source(),
            storage_path: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> EventsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventsError::Config("Could not determine config directory".into()))?
            .join("aievents");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> EventsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> EventsResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| EventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventsError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn storage_path(&self) -> EventsResult<PathBuf> {
        if let Some(path) = &self.storage_path {
            return Ok(expand(path));
        }

        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| EventsError::Config("Could not determine data directory".into()))?;
        Ok(data_dir.join("aievents").join("local_storage.json"))
    }

    pub fn source(&self, kind: EventKind) -> Source {
        let value = match kind {
            EventKind::Hackathon => &self.hackathons_source,
            EventKind::Conference => &self.conferences_source,
        };
        Source::resolve(value, &self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventsResult<()> {
        let contents = format!(
            "\
# aievents configuration

# Directory holding the event CSV files:
# data_dir = \"{}\"

# Event lists (file name, path, or http(s) URL):
# hackathons_source = \"{}\"
# conferences_source = \"{}\"

# Where favorites are saved:
# storage_path = \"~/.local/share/aievents/local_storage.json\"
",
            DEFAULT_DATA_DIR, DEFAULT_HACKATHONS_SOURCE, DEFAULT_CONFERENCES_SOURCE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
