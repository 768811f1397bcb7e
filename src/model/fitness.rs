//! View models for the remote API's users, workout programs, and exercises.

use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_trainer_id: Option<i64>,

    #[serde(default)]
    pub account_type: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Creation payload for `POST /Users`. Carries the password, so it is never
/// read back or logged.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_trainer_id: Option<i64>,

    pub account_type: Role,
}

/// Form fields shared by the create-trainer and create-client screens.
#[derive(Clone, Default)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewAccount {
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    pub fn into_user(self, account_type: Role, personal_trainer_id: Option<i64>) -> NewUser {
        NewUser {
            user_id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            personal_trainer_id,
            account_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgram {
    pub workout_program_id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub exercises: Vec<Exercise>,

    #[serde(default)]
    pub personal_trainer_id: Option<i64>,

    #[serde(default)]
    pub client_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutProgram {
    pub name: String,
    pub description: String,
    pub exercises: Vec<NewExercise>,
    pub personal_trainer_id: i64,
    pub client_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub exercise_id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub sets: i32,

    #[serde(default)]
    pub repetitions: Option<i32>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub workout_program_id: Option<i64>,

    #[serde(default)]
    pub personal_trainer_id: Option<i64>,
}

impl Exercise {
    /// Repetitions when set and non-zero, else the time, else `N/A`.
    pub fn reps_or_time(&self) -> String {
        if let Some(reps) = self.repetitions.filter(|r| *r != 0) {
            return reps.to_string();
        }
        match self.time.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "N/A".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub sets: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    pub workout_program_id: i64,
    pub personal_trainer_id: i64,
}
