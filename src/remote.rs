//! HTTP access to the fitness API.
//!
//! `ApiClient` is the stateless request helper. `FitnessService` pairs it with
//! a token store and exposes one method per remote operation.

use anyhow::{Context, Result};

mod error;
pub use self::error::{ApiError, UNKNOWN_ERROR};

mod http_client;
pub use self::http_client::Method;

mod types;
pub use self::types::*;

mod services;
pub use self::services::FitnessService;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fitcoach/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
