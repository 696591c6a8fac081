//! Persisted client state: theme preference and recent conversions.
//!
//! Each value lives in its own JSON file under the state directory, keyed by
//! a fixed name ([`THEME_FILE`], [`RECENT_FILE`]).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::error::ClientError;

/// File holding the serialized [`Theme`].
pub const THEME_FILE: &str = "theme.json";

/// File holding the serialized recent-conversion list.
pub const RECENT_FILE: &str = "recent.json";

/// Number of conversions kept in the local history.
pub const MAX_RECENT: usize = 5;

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// One entry of the local history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentConversion {
    pub original_url: String,
    pub short_url: String,
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Local UI state with an explicit persistence boundary ([`ClientState::save`]).
#[derive(Debug, Clone)]
pub struct ClientState {
    dir: PathBuf,
    theme: Theme,
    recent: Vec<RecentConversion>,
}

impl ClientState {
    /// Empty state rooted at `dir`; nothing is read or written.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            theme: Theme::default(),
            recent: Vec::new(),
        }
    }

    /// Loads state from `dir`.
    ///
    /// Missing or unreadable files fall back to defaults, so a corrupted file
    /// never blocks the client.
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let mut state = Self::new(dir);

        state.theme = read_value(&state.dir.join(THEME_FILE)).unwrap_or_default();
        let mut recent: Vec<RecentConversion> =
            read_value(&state.dir.join(RECENT_FILE)).unwrap_or_default();
        recent.truncate(MAX_RECENT);
        state.recent = recent;

        state
    }

    /// Writes every value to its file, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::State`] on I/O failures.
    pub fn save(&self) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir)?;
        write_value(&self.dir.join(THEME_FILE), &self.theme)?;
        write_value(&self.dir.join(RECENT_FILE), &self.recent)?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Recent conversions, most recent first.
    pub fn recent(&self) -> &[RecentConversion] {
        &self.recent
    }

    /// The most recent conversion, if any.
    pub fn latest(&self) -> Option<&RecentConversion> {
        self.recent.first()
    }

    /// Puts `conversion` at the front, dropping an older entry for the same
    /// original URL and anything beyond [`MAX_RECENT`].
    pub fn push_recent(&mut self, conversion: RecentConversion) {
        self.recent
            .retain(|c| c.original_url != conversion.original_url);
        self.recent.insert(0, conversion);
        self.recent.truncate(MAX_RECENT);
    }
}

/// Default state directory: `$XDG_CONFIG_HOME/shortlink`, then
/// `$HOME/.config/shortlink`, then `./.shortlink`.
pub fn default_state_dir() -> PathBuf {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(config_home).join("shortlink");
    }

    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".config").join("shortlink");
    }

    PathBuf::from(".shortlink")
}

fn read_value<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let bytes = fs::read(path).ok()?;

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable state file");
            None
        }
    }
}

fn write_value<T: Serialize>(path: &Path, value: &T) -> Result<(), ClientError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(std::io::Error::other)?;
    fs::write(path, bytes)?;
    Ok(())
}
