//! In-memory stand-in for the fitness REST API, for local development and
//! integration tests. Tokens are unsigned; anything holding a well-formed,
//! unexpired token is trusted.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use anyhow::{Context, Result};
use axum::extract::{Extension, Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;

use fitcoach::model::{Role, User, WorkoutProgram};

#[path = "fitcoach_mock_api/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "fitcoach_mock_api/auth.rs"]
mod auth;
use self::auth::*;
#[path = "fitcoach_mock_api/handlers_users.rs"]
mod handlers_users;
use self::handlers_users::*;
#[path = "fitcoach_mock_api/handlers_programs.rs"]
mod handlers_programs;
use self::handlers_programs::*;
#[path = "fitcoach_mock_api/routes.rs"]
mod routes;
use self::routes::*;

/// Authenticated caller, taken from the bearer token's claims.
#[derive(Clone, Debug)]
struct Subject {
    user_id: i64,
    role: Role,
}

#[derive(Clone, Debug)]
struct Account {
    user: User,
    password: String,
}

struct AppState {
    accounts: RwLock<BTreeMap<i64, Account>>,
    programs: RwLock<BTreeMap<i64, WorkoutProgram>>,

    // Shared id sequence for users, programs, and exercises.
    next_id: AtomicI64,

    // API requests served, health checks excluded.
    requests: AtomicU64,

    token_ttl: time::Duration,
}

impl AppState {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Parser)]
#[command(name = "fitcoach-mock-api")]
#[command(about = "In-memory fitness API (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8081")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Email of the seeded manager account
    #[arg(long, default_value = "manager@fitcoach.local")]
    manager_email: String,

    /// Password of the seeded manager account
    #[arg(long, default_value = "manager")]
    manager_password: String,

    /// Lifetime of issued tokens, in seconds
    #[arg(long, default_value_t = 3600)]
    token_ttl_secs: i64,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let filter = tracing_subscriber::EnvFilter::try_from_env(fitcoach::model::LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let manager = Account {
        user: User {
            user_id: 1,
            first_name: "Default".to_string(),
            last_name: "Manager".to_string(),
            email: args.manager_email,
            personal_trainer_id: None,
            account_type: Role::Manager.as_str().to_string(),
        },
        password: args.manager_password,
    };

    let state = Arc::new(AppState {
        accounts: RwLock::new(BTreeMap::from([(1, manager)])),
        programs: RwLock::new(BTreeMap::new()),
        next_id: AtomicI64::new(2),
        requests: AtomicU64::new(0),
        token_ttl: time::Duration::seconds(args.token_ttl_secs),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_router(state.clone()))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, "fitcoach-mock-api listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "requests": state.requests.load(Ordering::Relaxed),
    }))
}

async fn count_requests(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    state.requests.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(method = %req.method(), path = %req.uri().path(), "api request");
    next.run(req).await
}
