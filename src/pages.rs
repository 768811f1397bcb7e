//! Role-specific screens.
//!
//! Each page runs the session guard for its role, calls the resource services
//! it needs, and returns either a redirect or a rendered view. Form input is
//! passed in already collected; validation errors never reach the network.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::{Role, UnverifiedClaims, WorkoutProgram};
use crate::remote::FitnessService;
use crate::routes::{LOGIN_ROUTE, Route};
use crate::session::{GuardOutcome, guard};
use crate::store::TokenStore;

mod client;
mod login;
mod manager;
mod profile;
mod root;
mod trainer;

pub use self::client::{client_dashboard, client_homepage};
pub use self::login::{login_page, logout, submit_login};
pub use self::manager::{create_trainer_page, manager_dashboard, manager_homepage};
pub use self::profile::profile_lines;
pub use self::root::root_page;
pub use self::trainer::{
    ClientAction, ExerciseForm, ProgramAction, ProgramForm, trainer_clients, trainer_dashboard,
    trainer_homepage, trainer_workout_programs,
};

/// What a page run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageOutcome {
    Redirect {
        to: Route,
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    Render(PageView),
}

impl PageOutcome {
    pub fn redirect(to: Route) -> Self {
        PageOutcome::Redirect { to, notice: None }
    }

    pub fn redirect_with_notice(to: Route, notice: impl Into<String>) -> Self {
        PageOutcome::Redirect {
            to,
            notice: Some(notice.into()),
        }
    }

    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            PageOutcome::Redirect { to, .. } => Some(*to),
            PageOutcome::Render(_) => None,
        }
    }

    pub fn view(&self) -> Option<&PageView> {
        match self {
            PageOutcome::Render(view) => Some(view),
            PageOutcome::Redirect { .. } => None,
        }
    }
}

/// Plain-text rendering of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: String,
    pub lines: Vec<String>,

    /// Inline error, shown in place of a form result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl PageView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Record an error unless an earlier one is already showing.
    pub fn fail(&mut self, error: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(error.into());
        }
    }

    pub fn render(self) -> PageOutcome {
        PageOutcome::Render(self)
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Run the guard for `role`, mapping every failure to a login redirect.
pub(crate) fn guarded<S: TokenStore>(
    svc: &FitnessService<S>,
    role: Role,
) -> Result<UnverifiedClaims, PageOutcome> {
    match guard(svc.store(), role) {
        GuardOutcome::Valid(claims) => Ok(claims),
        outcome => {
            tracing::debug!(?outcome, required = %role, "redirecting to login");
            Err(PageOutcome::redirect(LOGIN_ROUTE))
        }
    }
}

pub(crate) fn display_name<'a>(claims: &'a UnverifiedClaims, fallback: &'a str) -> &'a str {
    if claims.name.trim().is_empty() {
        fallback
    } else {
        &claims.name
    }
}

pub(crate) fn program_lines(program: &WorkoutProgram) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {}", program.workout_program_id, program.name),
        format!("  {}", program.description),
    ];
    if program.exercises.is_empty() {
        lines.push("  (no exercises)".to_string());
        return lines;
    }
    lines.push(format!(
        "  {:<6} {:<20} {:<30} {:>4}  {}",
        "ID", "Exercise", "Description", "Sets", "Reps/Time"
    ));
    for ex in &program.exercises {
        lines.push(format!(
            "  {:<6} {:<20} {:<30} {:>4}  {}",
            ex.exercise_id,
            ex.name,
            ex.description,
            ex.sets,
            ex.reps_or_time()
        ));
    }
    lines
}

#[derive(Debug, thiserror::Error)]
#[error("unknown tab `{tab}` (expected one of: {expected})")]
pub struct UnknownTab {
    tab: String,
    expected: &'static str,
}

/// Tabs on the trainer dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    Clients,
    Workouts,
    Profile,
}

impl FromStr for DashboardTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(DashboardTab::Dashboard),
            "clients" => Ok(DashboardTab::Clients),
            "workouts" => Ok(DashboardTab::Workouts),
            "profile" => Ok(DashboardTab::Profile),
            _ => Err(UnknownTab {
                tab: s.to_string(),
                expected: "dashboard, clients, workouts, profile",
            }),
        }
    }
}

/// Tabs on the client dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientTab {
    #[default]
    Dashboard,
    Workouts,
    Profile,
}

impl FromStr for ClientTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(ClientTab::Dashboard),
            "workouts" => Ok(ClientTab::Workouts),
            "profile" => Ok(ClientTab::Profile),
            _ => Err(UnknownTab {
                tab: s.to_string(),
                expected: "dashboard, workouts, profile",
            }),
        }
    }
}

/// Open `route` without submitting any form.
///
/// `tab` applies to the dashboards, `program` selects a program on the
/// trainer's workout-programs page. Both are ignored elsewhere.
pub fn open<S: TokenStore>(
    svc: &FitnessService<S>,
    route: Route,
    tab: Option<&str>,
    program: Option<i64>,
) -> Result<PageOutcome, UnknownTab> {
    let outcome = match route {
        Route::Root => root_page(svc),
        Route::Login => login_page(svc),
        Route::ManagerHomepage => manager_homepage(svc),
        Route::ManagerDashboard => manager_dashboard(svc, None),
        Route::ManagerCreateTrainer => create_trainer_page(svc, None),
        Route::TrainerHomepage => trainer_homepage(svc),
        Route::TrainerDashboard => {
            let tab = tab.map(str::parse::<DashboardTab>).transpose()?;
            trainer_dashboard(svc, tab.unwrap_or_default())
        }
        Route::TrainerClients => trainer_clients(svc, ClientAction::View),
        Route::TrainerWorkoutPrograms => {
            trainer_workout_programs(svc, ProgramAction::View { selected: program })
        }
        Route::ClientHomepage => client_homepage(svc),
        Route::ClientDashboard => {
            let tab = tab.map(str::parse::<ClientTab>).transpose()?;
            client_dashboard(svc, tab.unwrap_or_default())
        }
    };
    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod tests;
