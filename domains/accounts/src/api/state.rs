//! Accounts domain state

use museum_common::{Error, Result};
use museum_store::SharedStore;

use crate::repository::AccountRepository;

/// Application state for the accounts domain.
///
/// The store handle is absent when no database is configured; both auth
/// handlers answer with the configuration error in that case.
#[derive(Clone)]
pub struct AccountsState {
    store: Option<SharedStore>,
}

impl AccountsState {
    pub fn new(store: Option<SharedStore>) -> Self {
        Self { store }
    }

    /// Repository handle, or `Error::Configuration` when no store is set.
    pub fn accounts(&self) -> Result<AccountRepository> {
        self.store
            .clone()
            .map(AccountRepository::new)
            .ok_or(Error::Configuration)
    }
}
