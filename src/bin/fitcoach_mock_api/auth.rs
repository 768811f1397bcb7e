use fitcoach::model::{NumericDate, UnverifiedClaims};
use fitcoach::token::{decode_claims, encode_unsigned_token};

use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, Response> {
    let user = {
        let accounts = state.accounts.read().await;
        accounts
            .values()
            .find(|a| a.user.email.eq_ignore_ascii_case(&payload.email))
            .filter(|a| a.password == payload.password)
            .map(|a| a.user.clone())
    };
    let Some(user) = user else {
        tracing::info!(email = %payload.email, "login rejected");
        return Err(unauthorized());
    };

    let jwt = mint_token(&user, state.token_ttl).map_err(internal_error)?;
    tracing::info!(user_id = user.user_id, role = %user.account_type, "login");
    Ok(Json(serde_json::json!({ "jwt": jwt })))
}

pub(super) fn mint_token(user: &User, ttl: time::Duration) -> Result<String> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = UnverifiedClaims {
        user_id: user.user_id.to_string(),
        name: user.full_name(),
        email: user.email.clone(),
        role: user.account_type.clone(),
        group_id: None,
        exp: Some(NumericDate::Seconds(now.saturating_add(ttl.whole_seconds()))),
        nbf: Some(NumericDate::Seconds(now)),
    };
    encode_unsigned_token(&claims).context("encode token claims")
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };
    let Some(claims) = decode_claims(token) else {
        return unauthorized();
    };
    if claims.is_expired_at(time::OffsetDateTime::now_utc()) {
        return unauthorized();
    }
    let (Some(user_id), Some(role)) = (claims.numeric_user_id(), claims.role()) else {
        return unauthorized();
    };
    if !state.accounts.read().await.contains_key(&user_id) {
        return unauthorized();
    }

    let mut req = req;
    req.extensions_mut().insert(Subject { user_id, role });
    next.run(req).await
}
