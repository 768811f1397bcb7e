use super::*;
use crate::token::decode_claims;

/// Landing page. Sends a live session to its dashboard; never clears.
pub fn root_page<S: TokenStore>(svc: &FitnessService<S>) -> PageOutcome {
    let claims = svc.store().get().and_then(|t| decode_claims(&t));
    if let Some(claims) = claims {
        let now = time::OffsetDateTime::now_utc();
        if let Some(role) = claims.role().filter(|_| !claims.is_expired_at(now)) {
            return PageOutcome::redirect(role.dashboard_route());
        }
    }

    PageView::new("Fitness App")
        .line("Manage your workout programs, track progress,")
        .line("and more, all in one place.")
        .line("")
        .line(format!("Login to your account: {}", LOGIN_ROUTE))
        .render()
}
