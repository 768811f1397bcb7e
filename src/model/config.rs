use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// API base URL baked into the build; override with `FITCOACH_API_URL` or `--api-url`.
pub const DEFAULT_API_URL: &str = "https://swafe24fitness.azurewebsites.net/api";

pub const API_URL_ENV: &str = "FITCOACH_API_URL";
pub const HOME_ENV: &str = "FITCOACH_HOME";
pub const LOG_ENV: &str = "FITCOACH_LOG";

pub const SESSION_FILE: &str = "session.json";

const DEFAULT_STATE_DIR: &str = ".fitcoach";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Flag value, then environment, then built-in default.
    pub fn resolve(api_url: Option<String>, state_dir: Option<PathBuf>) -> Result<Self> {
        let base_url = api_url
            .or_else(|| non_empty_env(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let state_dir = match state_dir {
            Some(dir) => dir,
            None => match non_empty_env(HOME_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => {
                    let home = std::env::var_os("HOME").context(
                        "HOME is not set (pass --state-dir or set FITCOACH_HOME)",
                    )?;
                    PathBuf::from(home).join(DEFAULT_STATE_DIR)
                }
            },
        };

        Ok(Self::new(base_url, state_dir))
    }

    pub fn new(base_url: impl Into<String>, state_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            state_dir: state_dir.into(),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Persisted session record, the file-backed equivalent of a browser cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,

    /// RFC 3339 timestamp after which the record is ignored.
    pub expires_at: String,

    #[serde(default)]
    pub secure: bool,
}
