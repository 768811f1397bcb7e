use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::model::{SESSION_FILE, StoredToken};

/// How long a stored session token is kept before it is treated as absent.
pub const TOKEN_TTL: Duration = Duration::days(1);

/// Storage for the single active session token.
///
/// Implementations never surface errors: a backend that cannot read or
/// write logs the failure and behaves as if no token were stored.
pub trait TokenStore {
    fn set(&self, token: &str);
    fn get(&self) -> Option<String>;
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

fn new_record(token: &str, now: OffsetDateTime) -> StoredToken {
    let expires_at = (now + TOKEN_TTL)
        .format(&Rfc3339)
        .unwrap_or_else(|_| (now + TOKEN_TTL).unix_timestamp().to_string());
    StoredToken {
        token: token.to_string(),
        expires_at,
        secure: true,
    }
}

fn record_is_live(record: &StoredToken, now: OffsetDateTime) -> bool {
    match OffsetDateTime::parse(&record.expires_at, &Rfc3339) {
        Ok(expires_at) => now < expires_at,
        Err(err) => {
            tracing::warn!(error = %err, "stored session has an unreadable expiry");
            false
        }
    }
}

/// Process-local store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    record: Mutex<Option<StoredToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    pub fn record(&self) -> Option<StoredToken> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<StoredToken>> {
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) {
        *self.lock() = Some(new_record(token, OffsetDateTime::now_utc()));
    }

    fn get(&self) -> Option<String> {
        let mut slot = self.lock();
        match slot.as_ref() {
            Some(record) if record_is_live(record, OffsetDateTime::now_utc()) => {
                Some(record.token.clone())
            }
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

/// Cookie-like store: one `session.json` file in the state directory.
///
/// Concurrent processes share the file with last-writer-wins semantics.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_record(&self) -> Result<Option<StoredToken>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let record: StoredToken = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(Some(record))
    }

    pub fn write_record(&self, record: &StoredToken) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(record).context("serialize session record")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &str) {
        let record = new_record(token, OffsetDateTime::now_utc());
        if let Err(err) = self.write_record(&record) {
            tracing::warn!(error = %format!("{:#}", err), "could not store session token");
        }
    }

    fn get(&self) -> Option<String> {
        let record = match self.read_record() {
            Ok(r) => r?,
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "could not read session token");
                return None;
            }
        };
        if record_is_live(&record, OffsetDateTime::now_utc()) {
            return Some(record.token);
        }
        tracing::debug!(path = %self.path.display(), "stored session expired");
        self.clear();
        None
    }

    fn clear(&self) {
        if let Err(err) = self.remove() {
            tracing::warn!(error = %format!("{:#}", err), "could not clear session token");
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    restrict_permissions(&tmp)?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("chmod {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
