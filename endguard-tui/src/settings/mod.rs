//! Persisted console settings.
//!
//! The terminal analog of the browser's local storage: a typed
//! key-value provider over a byte-oriented backend. Values go through
//! bincode; the SQLite backend lives under the platform data directory.

mod backend;
mod sqlite;

pub use backend::SettingsBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Key for the persisted theme choice.
pub const THEME_KEY: &str = "appearance.theme";
/// Key for the persisted operator session.
pub const SESSION_KEY: &str = "auth.session";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("encode error: {0}")]
    Encode(bincode::Error),
    #[error("decode error: {0}")]
    Decode(bincode::Error),
}

/// Typed settings over a [`SettingsBackend`].
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Decode)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a value, falling back to `default` when the key is unset.
    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Encode)?;
        self.backend.set_bytes(key, bytes).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use dashmap::DashMap;

    #[derive(Default)]
    struct MemoryBackend {
        values: DashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl SettingsBackend for MemoryBackend {
        async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
            Ok(self.values.get(key).map(|v| v.clone()))
        }

        async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
            self.values.insert(key.to_string(), value);
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), SettingsError> {
            self.values.remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_typed_round_trip() {
        let settings = SettingsProvider::new(MemoryBackend::default());

        settings.set("k", &("pair".to_string(), 3u32)).await.unwrap();
        let back: Option<(String, u32)> = settings.get("k").await.unwrap();
        assert_eq!(back, Some(("pair".to_string(), 3)));
    }

    #[tokio::test]
    async fn test_get_or_falls_back() {
        let settings = SettingsProvider::new(MemoryBackend::default());
        let value: u32 = settings.get_or("missing", 7).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_delete_unsets() {
        let settings = SettingsProvider::new(MemoryBackend::default());
        settings.set("k", &1u8).await.unwrap();
        settings.delete("k").await.unwrap();
        assert_eq!(settings.get::<u8>("k").await.unwrap(), None);
    }
}
