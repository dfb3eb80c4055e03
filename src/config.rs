use crate::dex::DEFAULT_BASE_URL;
use crate::lookup::Capabilities;
use std::path::PathBuf;

pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

/// Runtime settings resolved from flags, environment and per-user directories.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub capabilities: Capabilities,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            capabilities: Capabilities::full(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Flags win over the environment, the environment over defaults.
    pub fn resolve(base_url: Option<String>, basic: bool, log_file: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|u| !u.trim().is_empty()))
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            capabilities: if basic {
                Capabilities::basic()
            } else {
                Capabilities::full()
            },
            log_file: log_file.or(defaults.log_file),
        }
    }
}

/// `<cache dir>/pokedex-explorer.log`, if a home directory can be found.
pub fn default_log_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "pokedex", "pokedex-explorer")
        .map(|dirs| dirs.cache_dir().join("pokedex-explorer.log"))
}
