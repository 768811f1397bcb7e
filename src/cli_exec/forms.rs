use fitcoach::pages::{ClientAction, ExerciseForm, ProgramAction, ProgramForm};

use super::*;

pub(super) fn handle_manager_command(cfg: &ClientConfig, command: ManagerCommands) -> Result<()> {
    let svc = service(cfg)?;
    match command {
        ManagerCommands::CreateTrainer(args) => {
            let (form, json) = account(args);
            let outcome = pages::create_trainer_page(&svc, Some(form));
            present(&svc, Route::ManagerCreateTrainer, outcome, json)
        }
    }
}

pub(super) fn handle_trainer_command(cfg: &ClientConfig, command: TrainerCommands) -> Result<()> {
    let svc = service(cfg)?;
    let (route, outcome, json) = match command {
        TrainerCommands::CreateClient(args) => {
            let (form, json) = account(args);
            let outcome = pages::trainer_clients(&svc, ClientAction::Create(form));
            (Route::TrainerClients, outcome, json)
        }
        TrainerCommands::DeleteClient { id, json } => {
            let outcome = pages::trainer_clients(&svc, ClientAction::Delete(id));
            (Route::TrainerClients, outcome, json)
        }
        TrainerCommands::CreateProgram {
            name,
            description,
            client,
            json,
        } => {
            let form = ProgramForm {
                name,
                description,
                client_id: client,
            };
            let outcome = pages::trainer_workout_programs(&svc, ProgramAction::Create(form));
            (Route::TrainerWorkoutPrograms, outcome, json)
        }
        TrainerCommands::DeleteProgram { program, json } => {
            let outcome = pages::trainer_workout_programs(
                &svc,
                ProgramAction::DeleteProgram {
                    program_id: program,
                },
            );
            (Route::TrainerWorkoutPrograms, outcome, json)
        }
        TrainerCommands::AddExercise {
            program,
            name,
            description,
            sets,
            reps_or_time,
            json,
        } => {
            let form = ExerciseForm {
                name,
                description,
                sets,
                reps_or_time,
            };
            let outcome = pages::trainer_workout_programs(
                &svc,
                ProgramAction::AddExercise {
                    program_id: program,
                    form,
                },
            );
            (Route::TrainerWorkoutPrograms, outcome, json)
        }
        TrainerCommands::DeleteExercise {
            program,
            exercise,
            json,
        } => {
            let outcome = pages::trainer_workout_programs(
                &svc,
                ProgramAction::DeleteExercise {
                    program_id: program,
                    exercise_id: exercise,
                },
            );
            (Route::TrainerWorkoutPrograms, outcome, json)
        }
    };
    present(&svc, route, outcome, json)
}
