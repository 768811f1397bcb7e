use time::OffsetDateTime;

use crate::model::{Role, UnverifiedClaims};
use crate::routes::{LOGIN_ROUTE, Route};
use crate::store::TokenStore;
use crate::token::decode_claims;

/// Result of checking the stored session against a page's required role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Unauthenticated,
    InvalidToken,
    WrongRole,
    Expired,
    Valid(UnverifiedClaims),
}

impl GuardOutcome {
    pub fn claims(&self) -> Option<&UnverifiedClaims> {
        match self {
            GuardOutcome::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    pub fn into_claims(self) -> Option<UnverifiedClaims> {
        match self {
            GuardOutcome::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    /// Where a page should send the user instead of rendering.
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            GuardOutcome::Valid(_) => None,
            _ => Some(LOGIN_ROUTE),
        }
    }
}

pub fn guard<S: TokenStore + ?Sized>(store: &S, required: Role) -> GuardOutcome {
    guard_at(store, required, OffsetDateTime::now_utc())
}

/// Check the stored token at `now`.
///
/// Every terminal state except `Unauthenticated` clears the store. Expiry is
/// checked before the role, so an expired token reports `Expired` whatever
/// role it carries.
pub fn guard_at<S: TokenStore + ?Sized>(
    store: &S,
    required: Role,
    now: OffsetDateTime,
) -> GuardOutcome {
    let Some(token) = store.get() else {
        return GuardOutcome::Unauthenticated;
    };

    let Some(claims) = decode_claims(&token) else {
        store.clear();
        return GuardOutcome::InvalidToken;
    };

    if claims.is_expired_at(now) {
        tracing::info!(user_id = %claims.user_id, "session expired");
        store.clear();
        return GuardOutcome::Expired;
    }

    if claims.role() != Some(required) {
        tracing::warn!(
            role = %claims.role,
            required = %required,
            "session role does not match page"
        );
        store.clear();
        return GuardOutcome::WrongRole;
    }

    GuardOutcome::Valid(claims)
}

#[cfg(test)]
#[path = "../tests/session/guard_tests.rs"]
mod tests;
