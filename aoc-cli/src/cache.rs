//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{cache_dir}/day{day:02}.txt`, raw text with no
/// metadata. Entries never expire.
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    /// Create a new input cache rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the cache path for a specific day
    pub fn cache_path(&self, day: u8) -> PathBuf {
        self.dir.join(format!("day{:02}.txt", day))
    }

    /// Get cached input or None if not cached
    ///
    /// Content is returned exactly as stored, empty files included.
    pub fn get(&self, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(day);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }

    /// Store input in cache
    pub fn put(&self, day: u8, input: &str) -> Result<PathBuf, CacheError> {
        let path = self.cache_path(day);

        // Create cache directory if needed
        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(&path, input)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());

        assert_eq!(cache.cache_path(1), temp.path().join("day01.txt"));
        assert_eq!(cache.cache_path(25), temp.path().join("day25.txt"));
    }

    #[test]
    fn test_cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().join("nested").join("inputs"));

        // Initially not cached
        assert!(cache.get(1).unwrap().is_none());

        // Store input, creating the directory
        let input = "test input\nline 2\n";
        let path = cache.put(1, input).unwrap();
        assert_eq!(path, cache.cache_path(1));

        // Now cached, byte for byte
        assert!(path.exists());
        assert_eq!(cache.get(1).unwrap(), Some(input.to_string()));
    }

    #[test]
    fn test_empty_file_served_as_is() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        fs::write(cache.cache_path(4), "").unwrap();

        assert_eq!(cache.get(4).unwrap(), Some(String::new()));
    }
}
