use clap::{Args, Subcommand};

use crate::{ManagerCommands, TrainerCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session token
    Login(LoginArgs),

    /// Clear the stored session token
    Logout,

    /// Show the claims of the stored session token
    Whoami(JsonArgs),

    /// Check credentials without storing a session
    Authorize(AuthorizeArgs),

    /// Open a page by route (e.g. /trainer/dashboard)
    Open(OpenArgs),

    /// Show the resolved configuration
    Config(JsonArgs),

    /// Manager pages
    Manager {
        #[command(subcommand)]
        command: ManagerCommands,
    },

    /// Personal trainer pages
    Trainer {
        #[command(subcommand)]
        command: TrainerCommands,
    },
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) password: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AuthorizeArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct OpenArgs {
    /// Page route
    pub(crate) route: String,

    /// Dashboard tab
    #[arg(long)]
    pub(crate) tab: Option<String>,

    /// Workout program to select (trainer workout-programs page)
    #[arg(long)]
    pub(crate) program: Option<i64>,

    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct JsonArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
