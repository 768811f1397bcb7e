use super::*;
use crate::remote::{LoginRequest, LoginResponse, Method};
use crate::token::decode_claims;

impl ApiClient {
    /// `POST /Users/login` without a bearer token.
    pub fn login_request(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let out: Option<LoginResponse> = self.call_anonymous(
            Method::Post,
            "/Users/login",
            Some(&LoginRequest { email, password }),
        )?;
        Ok(out.unwrap_or_default())
    }
}

impl<S: TokenStore> FitnessService<S> {
    /// Log in, store the issued token, and return it.
    ///
    /// The token must at least decode; nothing is stored otherwise.
    pub fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self.api.login_request(email, password)?;
        let jwt = resp
            .jwt
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::LoginFailed)?;
        let claims = decode_claims(&jwt).ok_or(ApiError::InvalidToken)?;
        self.store.set(&jwt);
        tracing::info!(user_id = %claims.user_id, role = %claims.role, "logged in");
        Ok(jwt)
    }

    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("logged out");
    }
}
