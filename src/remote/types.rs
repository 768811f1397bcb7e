//! Request/response payloads that only exist on the wire.

#[derive(Debug, serde::Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
}
