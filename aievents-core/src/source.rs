//! Where an event list's CSV text comes from: a local file or a URL.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{EventsError, EventsResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Interpret a configured source. `http(s)://` values are URLs; anything
    /// else is a path, with `~` expanded and relative paths taken from `base_dir`.
    pub fn resolve(value: &str, base_dir: &Path) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            return Source::Url(value.to_string());
        }

        let expanded = PathBuf::from(shellexpand::tilde(value).into_owned());
        if expanded.is_absolute() {
            Source::File(expanded)
        } else {
            Source::File(base_dir.join(expanded))
        }
    }

    /// Fetch the full text of the source.
    pub async fn fetch(&self) -> EventsResult<String> {
        match self {
            Source::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| self.fetch_error(e)),
            Source::Url(url) => {
                let response = reqwest::get(url)
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| self.fetch_error(e))?;
                response.text().await.map_err(|e| self.fetch_error(e))
            }
        }
    }

    fn fetch_error(&self, reason: impl fmt::Display) -> EventsError {
        EventsError::Fetch {
            location: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}
