//! Catalog domain state

use museum_common::{Error, Result};
use museum_store::SharedStore;

use crate::repository::ArtifactRepository;

/// Application state for the catalog domain.
///
/// The store handle is absent when no database is configured; storage-backed
/// handlers answer with the configuration error before building any query.
#[derive(Clone)]
pub struct CatalogState {
    store: Option<SharedStore>,
}

impl CatalogState {
    pub fn new(store: Option<SharedStore>) -> Self {
        Self { store }
    }

    /// Repository handle, or `Error::Configuration` when no store is set.
    pub fn artifacts(&self) -> Result<ArtifactRepository> {
        self.store
            .clone()
            .map(ArtifactRepository::new)
            .ok_or(Error::Configuration)
    }
}
