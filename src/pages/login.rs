use super::*;
use crate::token::decode_claims;

const TITLE: &str = "Login";

pub fn login_page<S: TokenStore>(_svc: &FitnessService<S>) -> PageOutcome {
    login_view().render()
}

fn login_view() -> PageView {
    PageView::new(TITLE)
        .line("Email")
        .line("Password")
        .line("")
        .line(format!("Back: {}", Route::Root))
}

/// Submit the login form.
///
/// On success the user lands on the home page of the role carried by the
/// issued token.
pub fn submit_login<S: TokenStore>(
    svc: &FitnessService<S>,
    email: &str,
    password: &str,
) -> PageOutcome {
    if email.trim().is_empty() || password.is_empty() {
        return login_view()
            .with_error("Email and password are required.")
            .render();
    }

    let token = match svc.login(email.trim(), password) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            return login_view()
                .with_error("Login failed. Please check your credentials.")
                .render();
        }
    };

    match decode_claims(&token).and_then(|c| c.role()) {
        Some(role) => PageOutcome::redirect(role.home_route()),
        None => {
            svc.store().clear();
            login_view()
                .with_error("Unknown user role. Please contact support.")
                .render()
        }
    }
}

pub fn logout<S: TokenStore>(svc: &FitnessService<S>) -> PageOutcome {
    svc.logout();
    PageOutcome::redirect_with_notice(LOGIN_ROUTE, "Logged out.")
}
