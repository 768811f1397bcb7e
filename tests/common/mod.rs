use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use fitcoach::remote::{ApiClient, FitnessService};
use fitcoach::store::MemoryTokenStore;

pub const MANAGER_EMAIL: &str = "boss@example.com";
pub const MANAGER_PASSWORD: &str = "hunter2";

pub struct ServerGuard {
    pub base_url: String,
    pub api_url: String,
    _data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl ServerGuard {
    /// API requests the server has seen, health checks excluded.
    #[allow(dead_code)]
    pub fn request_count(&self) -> Result<u64> {
        let body: serde_json::Value = reqwest::blocking::get(format!("{}/healthz", self.base_url))
            .context("healthz request")?
            .json()
            .context("parse healthz")?;
        body.get("requests")
            .and_then(|v| v.as_u64())
            .context("healthz has no request count")
    }

    #[allow(dead_code)]
    pub fn service(&self) -> Result<FitnessService<MemoryTokenStore>> {
        Ok(FitnessService::new(
            ApiClient::new(&self.api_url)?,
            MemoryTokenStore::new(),
        ))
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    spawn_server_with(&[])
}

pub fn spawn_server_with(extra: &[&str]) -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_fitcoach-mock-api"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--manager-email",
            MANAGER_EMAIL,
            "--manager-password",
            MANAGER_PASSWORD,
        ])
        .args(extra)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn fitcoach-mock-api")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        api_url: format!("{}/api", base_url),
        base_url,
        _data_dir: data_dir,
        child,
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Run the CLI against `api_url` with its own state directory.
#[allow(dead_code)]
pub fn run_fitcoach(api_url: &str, state_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_fitcoach"))
        .arg("--api-url")
        .arg(api_url)
        .arg("--state-dir")
        .arg(state_dir)
        .args(args)
        .env_remove("FITCOACH_LOG")
        .output()
        .with_context(|| format!("run fitcoach {:?}", args))
}

#[allow(dead_code)]
pub fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
