//! Key-value persistence port.
//!
//! Theme and session persistence go through [`KeyValueStore`] so the
//! header logic never touches a concrete backend. [`MemoryStorage`] backs
//! tests; [`FileStorage`] keeps values in a TOML file between runs.

mod file;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the persisted theme preference (`light` / `dark`).
pub const THEME_KEY: &str = "theme";

/// Key holding the JSON-serialized session payload written by the auth flow.
pub const PROFILE_KEY: &str = "Profile";

/// Errors that can occur when reading or writing persisted values.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize storage contents: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to lock storage file '{path}': {message}")]
    Lock { path: PathBuf, message: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed, string-valued persistent store.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability so a single store can be shared between the session
/// bootstrap and the view-state controller.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
