use fitcoach::session::authorize;
use fitcoach::store::TokenStore;
use fitcoach::token::decode_claims;

use super::*;
use crate::{AuthorizeArgs, LoginArgs};

pub(super) fn handle_login_command(cfg: &ClientConfig, args: LoginArgs) -> Result<()> {
    let svc = service(cfg)?;
    let outcome = pages::submit_login(&svc, &args.email, &args.password);
    present(&svc, Route::Login, outcome, args.json)
}

pub(super) fn handle_logout_command(cfg: &ClientConfig) -> Result<()> {
    let svc = service(cfg)?;
    pages::logout(&svc);
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(cfg: &ClientConfig, json: bool) -> Result<()> {
    let store = FileTokenStore::new(&cfg.state_dir);
    let token = store
        .get()
        .context("not logged in (run `fitcoach login --email ... --password ...`)")?;
    let claims = decode_claims(&token).context("stored session token cannot be decoded")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&claims).context("serialize claims json")?
        );
        return Ok(());
    }

    println!("user_id: {}", claims.user_id);
    println!("name: {}", claims.name);
    println!("email: {}", claims.email);
    println!("role: {}", claims.role);
    if let Some(group) = &claims.group_id {
        println!("group_id: {}", group);
    }
    for line in pages::profile_lines(&claims)
        .into_iter()
        .filter(|l| l.starts_with("Session"))
    {
        println!("{}", line);
    }
    if let Some(record) = store.read_record()? {
        println!("stored_until: {}", record.expires_at);
    }
    Ok(())
}

pub(super) fn handle_authorize_command(cfg: &ClientConfig, args: AuthorizeArgs) -> Result<()> {
    let api = ApiClient::new(&cfg.base_url)?;
    let user = authorize(&api, &args.email, &args.password).context("invalid credentials")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&user).context("serialize session user json")?
    );
    Ok(())
}

pub(super) fn handle_config_command(cfg: &ClientConfig, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(cfg).context("serialize config json")?
        );
    } else {
        println!("api_url: {}", cfg.base_url);
        println!("state_dir: {}", cfg.state_dir.display());
        println!("session_file: {}", cfg.session_path().display());
    }
    Ok(())
}
