//! Shared application state

use museum_store::SharedStore;

/// Top-level application state: the document store handle shared by every
/// handler, absent when no database is configured. Initialized once at
/// startup and cloned read-only into the domain states.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<SharedStore>,
}
