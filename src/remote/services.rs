use super::{ApiClient, ApiError};
use crate::store::TokenStore;

mod auth;
mod exercises;
mod programs;
mod users;

/// Session context: the API client plus the store holding the current token.
///
/// Every authenticated operation re-reads the token from the store, so a
/// `clear` takes effect on the next call.
pub struct FitnessService<S> {
    api: ApiClient,
    store: S,
}

impl<S: TokenStore> FitnessService<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.store.get().ok_or(ApiError::NoToken)
    }
}

#[cfg(test)]
#[path = "../tests/remote/services_tests.rs"]
mod tests;
