//! Authentication API handlers
//!
//! Implements:
//! - POST /api/auth/signup — register a new account
//! - POST /api/auth/signin — validate credentials
//!
//! Neither endpoint issues a session or token; every request authenticates
//! independently.

use axum::{extract::State, Json};
use museum_common::{crypto, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::state::AccountsState;
use crate::domain::entities::UserAccount;

/// Request body for `POST /api/auth/signup`.
///
/// No length or complexity rules on the password.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/signin`.
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Identity payload returned by both signup and signin. The password and its
/// digest are never echoed back.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// POST /api/auth/signup — register a new account
///
/// The existence check and the insert are two separate store calls with no
/// unique index behind them; concurrent signups with the same email can both
/// pass the check. Known race, accepted at this layer.
pub async fn signup(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<Json<AccountResponse>> {
    let repo = state.accounts()?;

    if repo.find_by_email(&request.email).await?.is_some() {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let account = UserAccount::new(
        request.name,
        request.email,
        crypto::hash_password(&request.password),
    );
    let id = repo.create(&account).await?;

    Ok(Json(AccountResponse {
        id: id.to_hex(),
        name: account.name,
        email: account.email,
    }))
}

/// POST /api/auth/signin — validate credentials
///
/// An unknown email and a wrong password take the same error path; callers
/// cannot tell which check failed.
pub async fn signin(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> Result<Json<AccountResponse>> {
    let repo = state.accounts()?;

    let account = repo
        .find_by_email(&request.email)
        .await?
        .filter(|account| crypto::verify_password(&request.password, &account.password_hash))
        .ok_or_else(|| Error::Authentication("Invalid email or password".to_string()))?;

    Ok(Json(AccountResponse {
        id: account.id.map(|id| id.to_hex()).unwrap_or_default(),
        name: account.name,
        email: account.email,
    }))
}
