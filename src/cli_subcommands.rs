use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum ManagerCommands {
    /// Create a personal trainer account
    CreateTrainer(AccountArgs),
}

#[derive(Subcommand)]
pub(crate) enum TrainerCommands {
    /// Create a client assigned to you
    CreateClient(AccountArgs),

    /// Delete a client
    DeleteClient {
        #[arg(long)]
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a workout program for a client
    CreateProgram {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Client user id
        #[arg(long)]
        client: Option<i64>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a workout program
    DeleteProgram {
        #[arg(long)]
        program: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an exercise to a workout program
    AddExercise {
        #[arg(long)]
        program: i64,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        sets: String,
        /// Repetitions (a number) or a time such as "60s"
        #[arg(long = "reps", default_value = "")]
        reps_or_time: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an exercise from a workout program
    DeleteExercise {
        #[arg(long)]
        program: i64,
        #[arg(long)]
        exercise: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub(crate) struct AccountArgs {
    #[arg(long, default_value = "")]
    pub(crate) first_name: String,
    #[arg(long, default_value = "")]
    pub(crate) last_name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) password: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
