//! Ole Restaurant Site Content Core
//!
//! Content and session stores for a single-page restaurant website with an
//! in-browser admin panel. The whole site lives in one [`models::SiteData`]
//! document; every mutation rewrites it in full under a fixed storage key,
//! and the public page reads it back through the publish filters in
//! [`display`].

pub mod auth;
pub mod config;
pub mod display;
pub mod errors;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

use std::sync::Arc;

use config::Config;
use errors::StoreError;
use storage::{FileStorage, Storage};
use store::{ContentStore, SessionStore};

/// The two stores and their configuration, sharing one backing storage.
///
/// Construct once at startup and pass by reference to consumers; there are no
/// ambient globals. Dropping it is the teardown.
pub struct SiteCms {
    pub content: ContentStore,
    pub session: SessionStore,
    pub config: Arc<Config>,
}

impl SiteCms {
    /// Open file-backed stores under the configured data directory.
    pub fn open(config: Config) -> Result<Self, StoreError> {
        tracing::info!("Data directory: {:?}", config.data_dir);
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&config.data_dir)?);
        Self::with_storage(storage, config)
    }

    /// Open stores over an injected storage, e.g. [`storage::MemoryStorage`]
    /// in tests.
    pub fn with_storage(storage: Arc<dyn Storage>, config: Config) -> Result<Self, StoreError> {
        let content = ContentStore::new(Arc::clone(&storage))?;
        let session = SessionStore::new(storage);
        Ok(Self {
            content,
            session,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests;
