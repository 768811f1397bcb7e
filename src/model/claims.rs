use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Account roles issued by the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    PersonalTrainer,
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::PersonalTrainer, Role::Client];

    /// Wire string used in tokens and `accountType` fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::PersonalTrainer => "PersonalTrainer",
            Role::Client => "Client",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unix-seconds timestamp as it appears in token claims.
///
/// The API has been seen emitting both JSON numbers and numeric strings, so
/// both are accepted. Fractional seconds are rounded down on the way in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NumericDate {
    Seconds(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumericDate {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NumericDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawNumericDate::deserialize(deserializer)? {
            RawNumericDate::Int(s) => NumericDate::Seconds(s),
            RawNumericDate::Float(f) => NumericDate::Seconds(f.floor() as i64),
            RawNumericDate::Text(t) => NumericDate::Text(t),
        })
    }
}

impl NumericDate {
    pub fn unix_seconds(&self) -> Option<i64> {
        match self {
            NumericDate::Seconds(s) => Some(*s),
            NumericDate::Text(t) => {
                let t = t.trim();
                t.parse().ok().or_else(|| {
                    t.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.floor() as i64)
                })
            }
        }
    }

    pub fn to_datetime(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.unix_seconds()?).ok()
    }
}

/// Claims read from a token payload without any signature check.
///
/// Nothing in here is trusted identity: a caller can only learn what the
/// token *says*. Field names follow the API's claim names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnverifiedClaims {
    #[serde(rename = "UserId", default, deserialize_with = "loose_string")]
    pub user_id: String,

    #[serde(rename = "Name", default, deserialize_with = "loose_string")]
    pub name: String,

    #[serde(rename = "Email", default, deserialize_with = "loose_string")]
    pub email: String,

    #[serde(rename = "Role", default, deserialize_with = "loose_string")]
    pub role: String,

    #[serde(
        rename = "GroupId",
        default,
        deserialize_with = "loose_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<NumericDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<NumericDate>,
}

impl UnverifiedClaims {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.exp.as_ref().and_then(NumericDate::to_datetime)
    }

    pub fn not_before(&self) -> Option<OffsetDateTime> {
        self.nbf.as_ref().and_then(NumericDate::to_datetime)
    }

    /// `now >= exp`, compared in milliseconds.
    ///
    /// A missing or non-numeric `exp` never expires.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        let Some(exp) = self.exp.as_ref().and_then(NumericDate::unix_seconds) else {
            return false;
        };
        let now_ms = now.unix_timestamp_nanos() / 1_000_000;
        now_ms >= i128::from(exp) * 1000
    }

    /// Numeric form of `UserId`, which the API expects in request bodies.
    pub fn numeric_user_id(&self) -> Option<i64> {
        self.user_id.trim().parse().ok()
    }
}

/// String claim as sent by issuers that emit ids as JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseString {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<LooseString> for String {
    fn from(value: LooseString) -> Self {
        match value {
            LooseString::Text(s) => s,
            LooseString::Number(n) => n.to_string(),
            LooseString::Bool(b) => b.to_string(),
        }
    }
}

fn loose_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<LooseString>::deserialize(deserializer)?.map(String::from))
}

// null reads as an empty claim
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(loose_optional_string(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../tests/model/claims_tests.rs"]
mod tests;
