mod claims;
mod config;
mod fitness;

pub use self::claims::{NumericDate, Role, UnverifiedClaims};
pub use self::config::{
    API_URL_ENV, ClientConfig, DEFAULT_API_URL, HOME_ENV, LOG_ENV, SESSION_FILE, StoredToken,
};
pub use self::fitness::{
    Exercise, NewAccount, NewExercise, NewUser, NewWorkoutProgram, User, WorkoutProgram,
};
