//! Startup configuration. The INI file supplies the connection parameters;
//! `AppConfig` carries everything else `main` decides once and hands down.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use ini::{Ini, ParseOption};
use tracing::debug;

use crate::error::ConfigError;

/// File name looked up when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "database.ini";
/// Section read when no `--section` is given.
pub const DEFAULT_SECTION: &str = "postgresql";
/// Section whose keys every other section inherits. It cannot be loaded on
/// its own.
const DEFAULTS_SECTION: &str = "DEFAULT";
/// Pause between a finished menu action and the next menu.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Everything the program needs to know before it opens the connection.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub section: String,
    pub pause: Duration,
}

impl AppConfig {
    /// Build the config from optional overrides, resolving the INI path
    /// through [`default_config_path`] when none is given.
    pub fn new(
        config_path: Option<PathBuf>,
        section: Option<String>,
        pause: Option<Duration>,
    ) -> Self {
        Self {
            config_path: config_path.unwrap_or_else(default_config_path),
            section: section.unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            pause: pause.unwrap_or(DEFAULT_PAUSE),
        }
    }

    pub fn load_connection_params(&self) -> Result<ConnectionParams, ConfigError> {
        load_config(&self.config_path, &self.section)
    }
}

/// Key/value pairs from one INI section, kept in key order. Later entries win
/// when a key repeats, which is how section keys override inherited ones.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    values: BTreeMap<String, String>,
}

impl ConnectionParams {
    /// Value for a lowercase key such as `dbname`, if the section set one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Every pair in key order. Used for logging and by callers that need
    /// to pass unknown keys through.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys, inherited ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| {
                if k == "password" {
                    (k, "***")
                } else {
                    (k, v)
                }
            }))
            .finish()
    }
}

/// Read `section` from the INI file at `path`. Values are taken verbatim:
/// no quote stripping and no escape processing, so passwords survive intact.
/// Keys are lowercased, and keys from `[DEFAULT]` (or from lines above the
/// first header) are inherited unless the section sets them itself.
/// Required keys are not checked here; a missing `dbname` surfaces when the
/// connection is opened.
pub fn load_config(path: &Path, section: &str) -> Result<ConnectionParams, ConfigError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, options).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let properties = ini
        .section(Some(section))
        .filter(|_| section != DEFAULTS_SECTION)
        .ok_or_else(|| ConfigError::SectionNotFound {
            section: section.to_string(),
            path: path.to_path_buf(),
        })?;

    let inherited = [ini.section(None::<String>), ini.section(Some(DEFAULTS_SECTION))]
        .into_iter()
        .flatten()
        .flat_map(|props| props.iter());
    let params: ConnectionParams = inherited
        .chain(properties.iter())
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();
    debug!(path = %path.display(), section, ?params, "loaded connection parameters");
    Ok(params)
}

/// First existing candidate among `./database.ini`, `./configs/database.ini`
/// and the per-user config directory. Falls back to the first candidate so
/// the eventual error names a sensible path.
pub fn default_config_path() -> PathBuf {
    let candidates = config_candidates();
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(DEFAULT_CONFIG_FILE),
        Path::new("configs").join(DEFAULT_CONFIG_FILE),
    ];
    if let Some(dirs) = ProjectDirs::from("", "", "student-records") {
        candidates.push(dirs.config_dir().join(DEFAULT_CONFIG_FILE));
    }
    candidates
}
