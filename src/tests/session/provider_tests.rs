use super::*;

#[test]
fn unreachable_api_yields_no_user() {
    let api = ApiClient::new("http://127.0.0.1:1/api").unwrap();
    assert_eq!(authorize(&api, "a@b.c", "pw"), None);
}
