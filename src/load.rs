//! Load-or-default file access.
//!
//! Missing inputs are a normal condition in the pipeline (a source was never
//! collected, a catalogue was never written). Instead of using file existence
//! as control flow, readers return a [`Loaded`] value tagged with whether the
//! data came from disk or from a fallback.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{RankingError, Result};

/// A value that was either read from disk or substituted with a default
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Found(T),
    Defaulted(T),
}

impl<T> Loaded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Found(value) | Loaded::Defaulted(value) => value,
        }
    }

    pub fn as_ref(&self) -> &T {
        match self {
            Loaded::Found(value) | Loaded::Defaulted(value) => value,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Loaded::Defaulted(_))
    }
}

/// Read a text file, falling back to `default()` if it does not exist.
///
/// Errors other than not-found are propagated.
pub fn read_to_string_or<F>(path: &Path, default: F) -> Result<Loaded<String>>
where
    F: FnOnce() -> String,
{
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Loaded::Found(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            Ok(Loaded::Defaulted(default()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Read and deserialize a JSON file, returning `None` if it does not exist
pub fn load_json_optional<T>(path: &Path) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let value = serde_json::from_str(&content).map_err(|e| RankingError::ParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Read and deserialize a JSON file, falling back to `T::default()` if it
/// does not exist
pub fn load_json_or_default<T>(path: &Path) -> Result<Loaded<T>>
where
    T: DeserializeOwned + Default,
{
    Ok(match load_json_optional(path)? {
        Some(value) => Loaded::Found(value),
        None => Loaded::Defaulted(T::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_json_is_defaulted() {
        let dir = tempdir().unwrap();
        let loaded: Loaded<Vec<u32>> = load_json_or_default(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_default());
        assert!(loaded.into_inner().is_empty());
    }

    #[test]
    fn test_present_json_is_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("numbers.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let loaded: Loaded<Vec<u32>> = load_json_or_default(&path).unwrap();
        assert_eq!(loaded, Loaded::Found(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2,").unwrap();

        let result: Result<Loaded<Vec<u32>>> = load_json_or_default(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_to_string_or_default() {
        let dir = tempdir().unwrap();
        let loaded = read_to_string_or(&dir.path().join("missing.md"), || "fallback".into()).unwrap();
        assert_eq!(loaded, Loaded::Defaulted("fallback".to_string()));
    }
}
