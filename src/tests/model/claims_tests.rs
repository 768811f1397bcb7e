use super::*;

fn claims_with_exp(exp: Option<NumericDate>) -> UnverifiedClaims {
    UnverifiedClaims {
        user_id: "7".to_string(),
        name: "Ada Trainer".to_string(),
        email: "ada@example.com".to_string(),
        role: "PersonalTrainer".to_string(),
        exp,
        ..Default::default()
    }
}

#[test]
fn role_parses_only_exact_wire_strings() {
    assert_eq!(Role::parse("Manager"), Some(Role::Manager));
    assert_eq!(Role::parse("PersonalTrainer"), Some(Role::PersonalTrainer));
    assert_eq!(Role::parse("Client"), Some(Role::Client));
    assert_eq!(Role::parse("client"), None);
    assert_eq!(Role::parse("Trainer"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn exp_accepts_numbers_and_numeric_strings() {
    let from_number: UnverifiedClaims =
        serde_json::from_str(r#"{"Role":"Client","exp":1700000000}"#).unwrap();
    let from_string: UnverifiedClaims =
        serde_json::from_str(r#"{"Role":"Client","exp":"1700000000"}"#).unwrap();

    assert_eq!(from_number.exp, Some(NumericDate::Seconds(1_700_000_000)));
    assert_eq!(from_string.exp, Some(NumericDate::Text("1700000000".to_string())));
    assert_eq!(from_number.expires_at(), from_string.expires_at());
}

#[test]
fn expiry_boundary_is_inclusive() {
    let exp = 1_700_000_000;
    let claims = claims_with_exp(Some(NumericDate::Seconds(exp)));

    let just_before = OffsetDateTime::from_unix_timestamp(exp - 1).unwrap();
    let at_exp = OffsetDateTime::from_unix_timestamp(exp).unwrap();

    assert!(!claims.is_expired_at(just_before));
    assert!(claims.is_expired_at(at_exp));
}

#[test]
fn missing_or_garbled_exp_never_expires() {
    let now = OffsetDateTime::now_utc();
    assert!(!claims_with_exp(None).is_expired_at(now));
    assert!(!claims_with_exp(Some(NumericDate::Text("soon".to_string()))).is_expired_at(now));
}

#[test]
fn numeric_user_id_requires_digits() {
    let mut claims = claims_with_exp(None);
    assert_eq!(claims.numeric_user_id(), Some(7));
    claims.user_id = "abc".to_string();
    assert_eq!(claims.numeric_user_id(), None);
}

#[test]
fn fractional_exp_rounds_down_to_seconds() {
    let claims: UnverifiedClaims =
        serde_json::from_str(r#"{"Role":"Client","exp":1700000000.9}"#).unwrap();
    assert_eq!(claims.exp, Some(NumericDate::Seconds(1_700_000_000)));

    let text = NumericDate::Text("1700000000.5".to_string());
    assert_eq!(text.unix_seconds(), Some(1_700_000_000));
}

#[test]
fn string_claims_accept_json_numbers_and_null() {
    let claims: UnverifiedClaims = serde_json::from_str(
        r#"{"UserId":5,"Name":null,"Email":"c@x","Role":"Client","GroupId":3}"#,
    )
    .unwrap();
    assert_eq!(claims.user_id, "5");
    assert_eq!(claims.numeric_user_id(), Some(5));
    assert_eq!(claims.name, "");
    assert_eq!(claims.group_id.as_deref(), Some("3"));

    let no_group: UnverifiedClaims =
        serde_json::from_str(r#"{"Role":"Client","GroupId":null}"#).unwrap();
    assert_eq!(no_group.group_id, None);
}
