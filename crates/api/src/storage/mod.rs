//! Object storage behind the media library.
//!
//! The store is a provider trait so the backing implementation can be
//! swapped (local disk today, a bucket provider later) and so tests can
//! inject failures. Media deletion depends on the ordering guarantee
//! documented on [`ObjectStore::remove`].

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

/// Error type for object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("I/O error for object '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// A named blob store with public URLs.
///
/// All methods are fallible and asynchronous. Callers sequencing a store
/// operation with a database write are responsible for the ordering; there
/// is no transaction spanning both.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the object stored under `key`.
    ///
    /// Failures must propagate: media deletion removes the object BEFORE
    /// the database row, and a failed removal must abort the row delete.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// The public URL the object is served at.
    fn public_url(&self, key: &str) -> String;
}

/// Build an object key for an upload: unix-millis prefix plus the original
/// filename with whitespace replaced by hyphens.
///
/// The timestamp prefix makes keys unique across re-uploads of the same
/// filename. Characters outside `[A-Za-z0-9._-]` are replaced by hyphens
/// and `..` runs are collapsed, so a derived key always passes
/// [`check_key`].
pub fn object_key(original_filename: &str) -> String {
    let mut sanitized: String = original_filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    while sanitized.contains("..") {
        sanitized = sanitized.replace("..", ".");
    }
    format!("{}-{}", Utc::now().timestamp_millis(), sanitized)
}

/// Validate that a key cannot escape the store root.
fn check_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Object store over a local directory, served publicly at
/// `{public_base_url}/media/{key}`.
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        check_key(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })?;
        tokio::fs::write(self.root.join(key), bytes)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        tokio::fs::remove_file(self.root.join(key))
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/media/{}", self.public_base_url, key)
    }
}
