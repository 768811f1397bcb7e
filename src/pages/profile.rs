use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::UnverifiedClaims;

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "Unknown"
    } else {
        value
    }
}

fn format_time(at: OffsetDateTime) -> String {
    at.format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Profile block shown on the dashboards, straight from the token claims.
pub fn profile_lines(claims: &UnverifiedClaims) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", or_unknown(&claims.name)),
        format!("Email: {}", or_unknown(&claims.email)),
        format!("Role: {}", or_unknown(&claims.role)),
    ];
    if let Some(group) = claims.group_id.as_deref().filter(|g| !g.is_empty()) {
        lines.push(format!("Group ID: {}", group));
    }
    if !claims.user_id.is_empty() {
        lines.push(format!("User ID: {}", claims.user_id));
    }
    if let Some(exp) = claims.expires_at() {
        lines.push(format!("Session Expires: {}", format_time(exp)));
    }
    if let Some(nbf) = claims.not_before() {
        lines.push(format!("Session Active Since: {}", format_time(nbf)));
    }
    lines
}
