use std::fmt;
use std::str::FromStr;

use crate::model::Role;

/// Page routes of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    ManagerHomepage,
    ManagerDashboard,
    ManagerCreateTrainer,
    TrainerHomepage,
    TrainerDashboard,
    TrainerClients,
    TrainerWorkoutPrograms,
    ClientHomepage,
    ClientDashboard,
}

/// Where every failed session check sends the user.
pub const LOGIN_ROUTE: Route = Route::Login;

const ROUTE_TABLE: [(Route, &str, Option<Role>); 11] = [
    (Route::Root, "/", None),
    (Route::Login, "/Users/login", None),
    (Route::ManagerHomepage, "/manager/homepage", Some(Role::Manager)),
    (Route::ManagerDashboard, "/manager/dashboard", Some(Role::Manager)),
    (
        Route::ManagerCreateTrainer,
        "/manager/create-trainer",
        Some(Role::Manager),
    ),
    (
        Route::TrainerHomepage,
        "/trainer/homepage",
        Some(Role::PersonalTrainer),
    ),
    (
        Route::TrainerDashboard,
        "/trainer/dashboard",
        Some(Role::PersonalTrainer),
    ),
    (
        Route::TrainerClients,
        "/trainer/clients",
        Some(Role::PersonalTrainer),
    ),
    (
        Route::TrainerWorkoutPrograms,
        "/trainer/workout-programs",
        Some(Role::PersonalTrainer),
    ),
    (Route::ClientHomepage, "/client/homepage", Some(Role::Client)),
    (Route::ClientDashboard, "/client/dashboard", Some(Role::Client)),
];

// role -> (home, dashboard)
const ROLE_ROUTES: [(Role, Route, Route); 3] = [
    (Role::Manager, Route::ManagerHomepage, Route::ManagerDashboard),
    (
        Role::PersonalTrainer,
        Route::TrainerHomepage,
        Route::TrainerDashboard,
    ),
    (Role::Client, Route::ClientHomepage, Route::ClientDashboard),
];

impl Route {
    pub fn all() -> impl Iterator<Item = Route> {
        ROUTE_TABLE.iter().map(|(r, _, _)| *r)
    }

    pub fn path(self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|(r, _, _)| *r == self)
            .map(|(_, p, _)| *p)
            .unwrap_or("/")
    }

    /// Role a session must carry to view this page; `None` for public pages.
    pub fn required_role(self) -> Option<Role> {
        ROUTE_TABLE
            .iter()
            .find(|(r, _, _)| *r == self)
            .and_then(|(_, _, role)| *role)
    }
}

impl Role {
    pub fn home_route(self) -> Route {
        role_routes(self).0
    }

    pub fn dashboard_route(self) -> Route {
        role_routes(self).1
    }
}

fn role_routes(role: Role) -> (Route, Route) {
    ROLE_ROUTES
        .iter()
        .find(|(r, _, _)| *r == role)
        .map(|(_, home, dash)| (*home, *dash))
        .unwrap_or((Route::Root, Route::Root))
}

#[derive(Debug, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        ROUTE_TABLE
            .iter()
            .find(|(_, p, _)| *p == normalized)
            .map(|(r, _, _)| *r)
            .ok_or_else(|| UnknownRoute(trimmed.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl serde::Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
