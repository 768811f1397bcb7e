mod common;

use anyhow::Result;

use common::{MANAGER_EMAIL, MANAGER_PASSWORD, run_fitcoach, stderr_of, stdout_of};

#[test]
fn login_lands_on_role_homepage_and_persists() -> Result<()> {
    let server = common::spawn_server()?;
    let state = tempfile::tempdir()?;

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["login", "--email", MANAGER_EMAIL, "--password", MANAGER_PASSWORD],
    )?;
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    let stdout = stdout_of(&out);
    assert!(stdout.contains("[/manager/homepage]"));
    assert!(stdout.contains("Welcome, Default Manager!"));
    assert!(state.path().join("session.json").exists());

    let out = run_fitcoach(&server.api_url, state.path(), &["whoami", "--json"])?;
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    let claims: serde_json::Value = serde_json::from_str(&stdout_of(&out))?;
    assert_eq!(claims["Role"], "Manager");
    assert_eq!(claims["UserId"], "1");

    let out = run_fitcoach(&server.api_url, state.path(), &["open", "/", "--json"])?;
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    let page: serde_json::Value = serde_json::from_str(&stdout_of(&out))?;
    assert_eq!(page["route"], "/manager/dashboard");

    let out = run_fitcoach(&server.api_url, state.path(), &["logout"])?;
    assert!(out.status.success());
    assert!(!state.path().join("session.json").exists());
    Ok(())
}

#[test]
fn wrong_role_page_clears_session_and_fails() -> Result<()> {
    let server = common::spawn_server()?;
    let state = tempfile::tempdir()?;

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["login", "--email", MANAGER_EMAIL, "--password", MANAGER_PASSWORD],
    )?;
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["open", "/trainer/dashboard", "--tab", "clients"],
    )?;
    assert!(!out.status.success());
    assert!(stdout_of(&out).contains("[/Users/login]"));
    assert!(stderr_of(&out).contains("no valid session"));
    assert!(!state.path().join("session.json").exists());
    Ok(())
}

#[test]
fn form_validation_fails_without_calling_the_api() -> Result<()> {
    let server = common::spawn_server()?;
    let state = tempfile::tempdir()?;

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["login", "--email", MANAGER_EMAIL, "--password", MANAGER_PASSWORD],
    )?;
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    let before = server.request_count()?;

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["manager", "create-trainer", "--first-name", "Only"],
    )?;
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("All fields are required."));
    assert_eq!(server.request_count()?, before);
    Ok(())
}

#[test]
fn bad_login_reports_inline_error() -> Result<()> {
    let server = common::spawn_server()?;
    let state = tempfile::tempdir()?;

    let out = run_fitcoach(
        &server.api_url,
        state.path(),
        &["login", "--email", MANAGER_EMAIL, "--password", "wrong"],
    )?;
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("Login failed. Please check your credentials."));
    assert!(!state.path().join("session.json").exists());
    Ok(())
}
