use thiserror::Error;

use crate::domain::{AccountId, Privilege};

/// Raised when a wrapper cannot create an account: its role does not allow
/// it, or the store is held by another borrow.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    #[error("Account {account_id} ({privilege}) is not allowed to create accounts")]
    AdminRequired {
        account_id: AccountId,
        privilege: Privilege,
    },
    #[error("Store is already borrowed; account was not created")]
    StoreBusy,
}

/// Errors from talking to a `StoreService` over its channel.
///
/// Store-level soft failures (unknown ids) are not errors; they still come back
/// as `false` or `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Store service closed: {0}")]
    Closed(String),
    #[error("Store service dropped the response: {0}")]
    Dropped(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown privilege: {0}")]
pub struct ParsePrivilegeError(pub String);
