use super::*;

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(serde_json::json!({ "message": msg }))).into_response()
}

pub(super) fn unauthorized() -> Response {
    message(StatusCode::UNAUTHORIZED, "Unauthorized")
}

pub(super) fn forbidden() -> Response {
    message(StatusCode::FORBIDDEN, "Forbidden")
}

pub(super) fn not_found(what: &str) -> Response {
    message(StatusCode::NOT_FOUND, &format!("{} not found", what))
}

pub(super) fn bad_request(msg: &str) -> Response {
    message(StatusCode::BAD_REQUEST, msg)
}

pub(super) fn conflict(msg: &str) -> Response {
    message(StatusCode::CONFLICT, msg)
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    message(StatusCode::INTERNAL_SERVER_ERROR, &format!("{:#}", err))
}
