//! Repository implementations for the accounts domain

pub mod accounts;

pub use accounts::AccountRepository;
