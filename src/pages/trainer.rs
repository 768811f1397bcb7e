use super::*;
use crate::model::{NewAccount, NewExercise, NewWorkoutProgram, User};

pub fn trainer_homepage<S: TokenStore>(svc: &FitnessService<S>) -> PageOutcome {
    let claims = match guarded(svc, Role::PersonalTrainer) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    PageView::new(format!(
        "Welcome, {}!",
        display_name(&claims, "Personal Trainer")
    ))
    .line("This is your homepage. Access all your functionality below.")
    .line(format!("Go to Dashboard: {}", Route::TrainerDashboard))
    .line(format!("Manage Clients: {}", Route::TrainerClients))
    .line(format!(
        "Manage Workout Programs: {}",
        Route::TrainerWorkoutPrograms
    ))
    .render()
}

pub fn trainer_dashboard<S: TokenStore>(svc: &FitnessService<S>, tab: DashboardTab) -> PageOutcome {
    let claims = match guarded(svc, Role::PersonalTrainer) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    let mut view = PageView::new(format!(
        "Welcome, {}!",
        display_name(&claims, "Trainer")
    ));

    match tab {
        DashboardTab::Dashboard => {
            view.push("Use the tabs to manage clients, workout programs, and profile.");
            view.push("Tabs: dashboard, clients, workouts, profile");
            view.push(format!("Back to Homepage: {}", Route::TrainerHomepage));
        }
        DashboardTab::Clients => {
            view.push("Your Clients");
            match svc.list_clients() {
                Ok(clients) if clients.is_empty() => view.push("No clients available."),
                Ok(clients) => view.lines.extend(clients.iter().map(client_line)),
                Err(err) => {
                    tracing::warn!(error = %err, "could not load clients");
                    view.fail("Failed to load clients.");
                }
            }
        }
        DashboardTab::Workouts => {
            view.push("Your Workout Programs");
            match svc.list_trainer_programs() {
                Ok(programs) if programs.is_empty() => {
                    view.push("No workout programs available.");
                }
                Ok(programs) => {
                    for program in &programs {
                        view.lines.extend(program_lines(program));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not load workout programs");
                    view.fail("Failed to load workout programs.");
                }
            }
        }
        DashboardTab::Profile => {
            view.push("Profile");
            view.lines.extend(profile_lines(&claims));
        }
    }

    view.render()
}

/// Shown when the session's `UserId` claim is not a number.
const MISSING_TRAINER_ID: &str = "Your session has no usable trainer id. Please log in again.";

fn client_line(client: &User) -> String {
    format!(
        "[{}] {} <{}>",
        client.user_id,
        client.full_name(),
        client.email
    )
}

/// Form submissions on the trainer's clients page.
#[derive(Clone, Default)]
pub enum ClientAction {
    #[default]
    View,
    Create(NewAccount),
    Delete(i64),
}

pub fn trainer_clients<S: TokenStore>(svc: &FitnessService<S>, action: ClientAction) -> PageOutcome {
    let claims = match guarded(svc, Role::PersonalTrainer) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    let mut view = PageView::new("Clients")
        .line("Create Client: First Name, Last Name, Email, Password");

    match action {
        ClientAction::View => {}
        ClientAction::Create(form) => {
            match (claims.numeric_user_id(), form.is_complete()) {
                (_, false) => view.fail("All fields are required."),
                (None, true) => view.fail(MISSING_TRAINER_ID),
                (Some(trainer_id), true) => match svc.create_client(form, trainer_id) {
                    Ok(client) => {
                        tracing::info!(user_id = client.user_id, "client created");
                        return PageOutcome::redirect_with_notice(
                            Route::TrainerClients,
                            "Client created successfully!",
                        );
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "create client failed");
                        view.fail("Error creating client.");
                    }
                },
            }
        }
        ClientAction::Delete(user_id) => match svc.delete_client(user_id) {
            Ok(_) => {
                return PageOutcome::redirect_with_notice(
                    Route::TrainerClients,
                    "Client deleted successfully!",
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, user_id, "delete client failed");
                view.fail("Error deleting client.");
            }
        },
    }

    view.push("");
    view.push("Your Clients");
    match svc.list_clients() {
        Ok(clients) if clients.is_empty() => view.push("No clients available."),
        Ok(clients) => view.lines.extend(clients.iter().map(client_line)),
        Err(err) => {
            tracing::warn!(error = %err, "could not load clients");
            view.fail("Failed to load clients.");
        }
    }
    view.render()
}

/// Create-program form. `client_id` is `None` until a client is picked.
#[derive(Clone, Debug, Default)]
pub struct ProgramForm {
    pub name: String,
    pub description: String,
    pub client_id: Option<i64>,
}

/// Add-exercise form, as typed.
#[derive(Clone, Debug, Default)]
pub struct ExerciseForm {
    pub name: String,
    pub description: String,
    pub sets: String,
    pub reps_or_time: String,
}

impl ExerciseForm {
    fn is_complete(&self) -> bool {
        [&self.name, &self.description, &self.sets, &self.reps_or_time]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// A whole number in the reps/time field is a repetition count; anything
    /// else is kept verbatim as a time.
    pub(crate) fn into_exercise(
        self,
        program_id: i64,
        trainer_id: i64,
    ) -> Result<NewExercise, &'static str> {
        let sets = self
            .sets
            .trim()
            .parse::<i32>()
            .map_err(|_| "Sets must be a whole number.")?;
        let entry = self.reps_or_time.trim();
        let (repetitions, time) = match entry.parse::<i32>() {
            Ok(reps) => (Some(reps), None),
            Err(_) => (None, Some(entry.to_string())),
        };
        Ok(NewExercise {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            sets,
            repetitions,
            time,
            workout_program_id: program_id,
            personal_trainer_id: trainer_id,
        })
    }
}

/// What the workout-programs page is asked to do.
#[derive(Clone, Debug)]
pub enum ProgramAction {
    View {
        selected: Option<i64>,
    },
    Create(ProgramForm),
    AddExercise {
        program_id: i64,
        form: ExerciseForm,
    },
    DeleteExercise {
        program_id: i64,
        exercise_id: i64,
    },
    DeleteProgram {
        program_id: i64,
    },
}

pub fn trainer_workout_programs<S: TokenStore>(
    svc: &FitnessService<S>,
    action: ProgramAction,
) -> PageOutcome {
    let claims = match guarded(svc, Role::PersonalTrainer) {
        Ok(c) => c,
        Err(redirect) => return redirect,
    };
    let trainer_id = claims.numeric_user_id();
    let mut view = PageView::new("Workout Programs");
    let mut notice = None;

    let selected = match action {
        ProgramAction::View { selected } => selected,
        ProgramAction::Create(form) => {
            let complete = !form.name.trim().is_empty() && !form.description.trim().is_empty();
            match (form.client_id, trainer_id) {
                (Some(_), None) if complete => view.fail(MISSING_TRAINER_ID),
                (Some(client_id), Some(trainer_id)) if complete => {
                    let program = NewWorkoutProgram {
                        name: form.name.trim().to_string(),
                        description: form.description.trim().to_string(),
                        exercises: Vec::new(),
                        personal_trainer_id: trainer_id,
                        client_id,
                    };
                    match svc.create_workout_program(&program) {
                        Ok(created) => {
                            tracing::info!(
                                program_id = created.workout_program_id,
                                "workout program created"
                            );
                            return PageOutcome::redirect_with_notice(
                                Route::TrainerWorkoutPrograms,
                                "Workout program created successfully!",
                            );
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "create workout program failed");
                            view.fail("Error creating workout program.");
                        }
                    }
                }
                _ => view.fail("All fields are required."),
            }
            None
        }
        ProgramAction::AddExercise { program_id, form } => {
            match (trainer_id, program_id != 0 && form.is_complete()) {
                (_, false) => view.fail("All exercise fields are required."),
                (None, true) => view.fail(MISSING_TRAINER_ID),
                (Some(trainer_id), true) => match form.into_exercise(program_id, trainer_id) {
                    Err(msg) => view.fail(msg),
                    Ok(exercise) => match svc.add_exercise(program_id, &exercise) {
                        Ok(_) => notice = Some("Exercise added successfully!".to_string()),
                        Err(err) => {
                            tracing::warn!(error = %err, program_id, "add exercise failed");
                            view.fail("Error adding exercise to the program.");
                        }
                    },
                },
            }
            Some(program_id).filter(|id| *id != 0)
        }
        ProgramAction::DeleteExercise {
            program_id,
            exercise_id,
        } => {
            match svc.delete_exercise(program_id, exercise_id) {
                Ok(_) => notice = Some("Exercise deleted successfully!".to_string()),
                Err(err) => {
                    tracing::warn!(error = %err, program_id, exercise_id, "delete exercise failed");
                    view.fail("Error deleting exercise.");
                }
            }
            Some(program_id)
        }
        ProgramAction::DeleteProgram { program_id } => {
            match svc.delete_workout_program(program_id) {
                Ok(_) => {
                    return PageOutcome::redirect_with_notice(
                        Route::TrainerWorkoutPrograms,
                        "Workout program deleted successfully!",
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, program_id, "delete workout program failed");
                    view.fail("Error deleting workout program.");
                }
            }
            None
        }
    };

    view.push("Clients");
    match svc.list_clients() {
        Ok(clients) if clients.is_empty() => view.push("No clients available."),
        Ok(clients) => view.lines.extend(clients.iter().map(client_line)),
        Err(err) => {
            tracing::warn!(error = %err, "could not load clients");
            view.fail("Error fetching clients.");
        }
    }

    view.push("");
    view.push("Your Workout Programs");
    match svc.list_trainer_programs() {
        Ok(programs) if programs.is_empty() => view.push("No workout programs available."),
        Ok(programs) => {
            for program in &programs {
                view.push(format!("[{}] {}", program.workout_program_id, program.name));
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not load workout programs");
            view.fail("Error fetching workout programs.");
        }
    }

    if let Some(program_id) = selected {
        view.push("");
        match svc.get_workout_program(program_id) {
            Ok(program) => {
                view.lines.extend(program_lines(&program));
                view.push("Add Exercise: Exercise Name, Exercise Description, Sets, Reps/Time");
            }
            Err(err) => {
                tracing::warn!(error = %err, program_id, "could not load program details");
                view.fail("Error fetching program details.");
            }
        }
    }

    view.with_notice(notice).render()
}
