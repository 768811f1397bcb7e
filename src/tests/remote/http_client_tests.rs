use super::*;

#[test]
fn failure_message_prefers_server_message() {
    let body = br#"{"message":"Email already in use"}"#;
    assert_eq!(
        failure_message(StatusCode::CONFLICT, body),
        "Email already in use"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    let bodies: [&[u8]; 4] = [b"", b"<html>oops</html>", br#"{"message":"  "}"#, br#"{"error":"x"}"#];
    for body in bodies {
        assert_eq!(
            failure_message(StatusCode::BAD_REQUEST, body),
            "request failed with status code 400"
        );
    }
}

#[test]
fn empty_success_body_parses_as_null() {
    let v: Option<serde_json::Value> = parse_body(b"").unwrap();
    assert!(v.is_none());
    let v: Option<serde_json::Value> = parse_body(b"  \n").unwrap();
    assert!(v.is_none());
}

#[test]
fn malformed_success_body_is_unexpected_response() {
    let err = parse_body::<Vec<i64>>(b"{\"not\":\"a list\"}").unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedResponse(_)));
}

#[test]
fn unreachable_server_surfaces_transport_message() {
    let api = ApiClient::new("http://127.0.0.1:1/api").unwrap();
    let err = api
        .get::<serde_json::Value>("/Users", "token")
        .unwrap_err();
    match err {
        ApiError::RequestFailed { status, message } => {
            assert_eq!(status, None);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn url_joins_base_and_path() {
    let api = ApiClient::new("http://example.test/api/").unwrap();
    assert_eq!(api.url("/Users/login"), "http://example.test/api/Users/login");
}
