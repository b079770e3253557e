//! Configuration resolution from the environment

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Event year used when `AOC_YEAR` is not set
pub const DEFAULT_YEAR: u16 = 2025;

pub const YEAR_VAR: &str = "AOC_YEAR";
pub const SESSION_VAR: &str = "AOC_SESSION";
pub const USER_AGENT_VAR: &str = "AOC_USER_AGENT";

/// Resolved runtime configuration
///
/// Built once in `main` and passed by reference to the input provider.
pub struct Config {
    /// Event year
    pub year: u16,
    /// Session key (zeroized on drop); empty when not configured
    pub session: Zeroizing<String>,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Identifying `User-Agent` sent to adventofcode.com
    pub user_agent: String,
}

impl Config {
    /// Build config from the process environment
    pub fn from_env(cache_dir: &Path) -> Result<Self, ConfigError> {
        Self::from_lookup(cache_dir, |key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(cache_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let user_agent = lookup(USER_AGENT_VAR).ok_or(ConfigError::Missing {
            var: USER_AGENT_VAR,
            hint: "Please set it to your repo URL (e.g. github.com/username/aoc).",
        })?;

        let year = match lookup(YEAR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: YEAR_VAR,
                value,
            })?,
            None => DEFAULT_YEAR,
        };

        let session = Zeroizing::new(lookup(SESSION_VAR).unwrap_or_default());

        Ok(Config {
            year,
            session,
            cache_dir: expand_tilde(cache_dir),
            user_agent,
        })
    }
}

/// Load variables from a `.env` file in the working directory, if any
///
/// Variables already present in the environment take precedence.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("failed to load .env file: {}", e),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.strip_prefix("~/").unwrap_or(""));
    }
    path.to_path_buf()
}
