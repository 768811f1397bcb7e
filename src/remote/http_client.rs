use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ApiClient, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl ApiClient {
    /// Send one authenticated JSON request and parse the 2xx body as `T`.
    ///
    /// An empty body parses as JSON `null`, so `Option<T>` callers get `None`.
    /// There is no retry: every call is a single attempt.
    pub fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(method, path, Some(token), body)
    }

    pub(super) fn call_anonymous<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(method, path, None, body)
    }

    pub(super) fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        self.call::<T, ()>(Method::Get, path, token, None)
    }

    pub(super) fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        self.call::<T, ()>(Method::Delete, path, token, None)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(?method, %url, authenticated = token.is_some(), "api request");

        let mut req = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().map_err(ApiError::transport)?;
        let status = resp.status();
        let bytes = resp.bytes().map_err(ApiError::transport)?;
        tracing::debug!(status = status.as_u16(), %url, "api response");

        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: Some(status.as_u16()),
                message: failure_message(status, &bytes),
            });
        }
        parse_body(&bytes)
    }
}

pub(super) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let trimmed = bytes.trim_ascii();
    let raw: &[u8] = if trimmed.is_empty() { b"null" } else { trimmed };
    serde_json::from_slice(raw).map_err(ApiError::UnexpectedResponse)
}

/// Server `message` when present, else a status description.
pub(super) fn failure_message(status: StatusCode, body: &[u8]) -> String {
    let server_message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        });
    server_message.unwrap_or_else(|| format!("request failed with status code {}", status.as_u16()))
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
