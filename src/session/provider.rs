use serde::Serialize;

use crate::remote::ApiClient;
use crate::token::decode_claims;

/// Identity handed back by a successful credentials check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

/// Check credentials against the login endpoint.
///
/// Returns `None` on any failure. Unlike `FitnessService::login`, nothing is
/// written to the token store.
pub fn authorize(api: &ApiClient, email: &str, password: &str) -> Option<SessionUser> {
    let resp = match api.login_request(email, password) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "credentials rejected");
            return None;
        }
    };
    let Some(token) = resp.jwt.filter(|t| !t.trim().is_empty()) else {
        tracing::warn!("login response carried no token");
        return None;
    };
    let claims = decode_claims(&token)?;
    Some(SessionUser {
        id: claims.user_id,
        name: claims.name,
        email: claims.email,
        role: claims.role,
        token,
    })
}

#[cfg(test)]
#[path = "../tests/session/provider_tests.rs"]
mod tests;
