//! Puzzle input provider: cache first, a single remote fetch otherwise

use crate::cache::InputCache;
use crate::config::Config;
use crate::error::InputError;
use aoc_http_client::{AocClient, AocError};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Where the returned input came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from an existing cache file
    Cache(PathBuf),
    /// Fetched remotely and written to this cache file
    Fetched(PathBuf),
}

/// Puzzle input together with its origin
#[derive(Debug, Clone)]
pub struct Input {
    pub text: String,
    pub source: InputSource,
}

/// Produces puzzle input for a day of the configured year
///
/// A cache hit performs no writes. A miss fetches once and persists the text
/// verbatim; a failed fetch leaves the cache untouched. Nothing guards
/// against two processes fetching the same day at once.
pub struct InputProvider {
    cache: InputCache,
    client: AocClient,
    year: u16,
    session: Zeroizing<String>,
}

impl InputProvider {
    /// Create a provider talking to adventofcode.com
    pub fn new(config: &Config) -> Result<Self, AocError> {
        let client = AocClient::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a provider with a preconfigured client
    pub fn with_client(config: &Config, client: AocClient) -> Self {
        Self {
            cache: InputCache::new(config.cache_dir.clone()),
            client,
            year: config.year,
            session: config.session.clone(),
        }
    }

    /// Get input for a day, using cache or fetching
    pub fn get_input(&self, day: u8) -> Result<Input, InputError> {
        if let Some(text) = self.cache.get(day)? {
            let path = self.cache.cache_path(day);
            tracing::info!(day, path = %path.display(), "input loaded from cache");
            return Ok(Input {
                text,
                source: InputSource::Cache(path),
            });
        }

        tracing::info!(day, year = self.year, "input not cached, fetching");
        let text = self
            .client
            .get_input(self.year, day, &self.session)
            .map_err(|source| InputError::Fetch { day, source })?;

        let path = self.cache.put(day, &text)?;
        tracing::info!(day, path = %path.display(), "input saved to cache");

        Ok(Input {
            text,
            source: InputSource::Fetched(path),
        })
    }
}
