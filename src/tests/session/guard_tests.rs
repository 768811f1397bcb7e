use time::macros::datetime;

use super::*;
use crate::model::NumericDate;
use crate::store::MemoryTokenStore;
use crate::token::encode_unsigned_token;

fn token(role: &str, exp: Option<i64>) -> String {
    encode_unsigned_token(&UnverifiedClaims {
        user_id: "7".to_string(),
        name: "Pat".to_string(),
        email: "pat@example.com".to_string(),
        role: role.to_string(),
        exp: exp.map(NumericDate::Seconds),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn missing_token_is_unauthenticated() {
    let store = MemoryTokenStore::new();
    let outcome = guard(&store, Role::Manager);
    assert_eq!(outcome, GuardOutcome::Unauthenticated);
    assert_eq!(outcome.redirect_target(), Some(Route::Login));
}

#[test]
fn garbage_token_is_invalid_and_cleared() {
    let store = MemoryTokenStore::with_token("not-a-token");
    assert_eq!(guard(&store, Role::Manager), GuardOutcome::InvalidToken);
    assert_eq!(store.get(), None);
}

#[test]
fn client_token_on_trainer_page_is_cleared() {
    let store = MemoryTokenStore::with_token(&token("Client", None));
    assert_eq!(guard(&store, Role::PersonalTrainer), GuardOutcome::WrongRole);
    assert_eq!(store.get(), None);
}

#[test]
fn unknown_role_never_matches() {
    let store = MemoryTokenStore::with_token(&token("Admin", None));
    assert_eq!(guard(&store, Role::Manager), GuardOutcome::WrongRole);
}

#[test]
fn expiry_is_inclusive_and_wins_over_role() {
    let now = datetime!(2024-05-01 12:00:00 UTC);
    let exp = now.unix_timestamp();

    let store = MemoryTokenStore::with_token(&token("Manager", Some(exp)));
    assert_eq!(guard_at(&store, Role::Manager, now), GuardOutcome::Expired);
    assert_eq!(store.get(), None);

    let store = MemoryTokenStore::with_token(&token("Client", Some(exp - 60)));
    assert_eq!(guard_at(&store, Role::Manager, now), GuardOutcome::Expired);
    assert_eq!(store.get(), None);
}

#[test]
fn valid_token_is_kept_and_returns_claims() {
    let now = datetime!(2024-05-01 12:00:00 UTC);
    let raw = token("Manager", Some(now.unix_timestamp() + 1));
    let store = MemoryTokenStore::with_token(&raw);

    let outcome = guard_at(&store, Role::Manager, now);
    assert_eq!(outcome.claims().map(|c| c.user_id.as_str()), Some("7"));
    assert_eq!(outcome.redirect_target(), None);
    assert_eq!(store.get(), Some(raw));
}
