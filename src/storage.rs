//! Durable string preferences.
//!
//! Storage is treated as fallible: private browsing, disabled cookies, and
//! quota limits all surface as [`StorageError`] instead of aborting the
//! calling handler.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Get/set access to one origin-scoped key/value store.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
