use anyhow::{Context, Result};

use fitcoach::model::{ClientConfig, NewAccount};
use fitcoach::pages::{self, PageOutcome};
use fitcoach::remote::{ApiClient, FitnessService};
use fitcoach::routes::Route;
use fitcoach::store::FileTokenStore;

use crate::{AccountArgs, Commands, ManagerCommands, TrainerCommands};

mod forms;
mod present;
mod session;

use self::present::present;

type Service = FitnessService<FileTokenStore>;

pub(crate) fn handle_command(cfg: &ClientConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => session::handle_login_command(cfg, args),
        Commands::Logout => session::handle_logout_command(cfg),
        Commands::Whoami(args) => session::handle_whoami_command(cfg, args.json),
        Commands::Authorize(args) => session::handle_authorize_command(cfg, args),
        Commands::Open(args) => {
            let svc = service(cfg)?;
            let route: Route = args.route.parse()?;
            let outcome = pages::open(&svc, route, args.tab.as_deref(), args.program)?;
            present(&svc, route, outcome, args.json)
        }
        Commands::Config(args) => session::handle_config_command(cfg, args.json),
        Commands::Manager { command } => forms::handle_manager_command(cfg, command),
        Commands::Trainer { command } => forms::handle_trainer_command(cfg, command),
    }
}

fn service(cfg: &ClientConfig) -> Result<Service> {
    let api = ApiClient::new(&cfg.base_url)
        .with_context(|| format!("create api client for {}", cfg.base_url))?;
    Ok(FitnessService::new(api, FileTokenStore::new(&cfg.state_dir)))
}

fn account(args: AccountArgs) -> (NewAccount, bool) {
    (
        NewAccount {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
        },
        args.json,
    )
}
