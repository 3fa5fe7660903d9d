// src/session/mod.rs

pub mod file_store;
pub mod store;
pub mod unauthorized;

use std::sync::Arc;

use crate::error::StorageError;

pub use file_store::FileTokenStore;
pub use store::{MemoryTokenStore, TokenStore};
pub use unauthorized::{NoopHandler, UnauthorizedHandler, LOGIN_PATH};

/// Key the bearer token lives under in the store.
pub const TOKEN_KEY: &str = "token";

/// Authentication state handed to the client at construction time.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    pub fn token(&self) -> Result<Option<String>, StorageError> {
        self.store.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
