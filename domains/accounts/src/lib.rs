//! Accounts domain: signup and credential validation for museum site users
//!
//! Signin only validates credentials and returns the account identity; no
//! session, token, or cookie exists anywhere in this service.

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::UserAccount;

// Re-export repository types
pub use repository::AccountRepository;

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
