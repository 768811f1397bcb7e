use fitcoach::model::{Exercise, NewExercise, NewWorkoutProgram};

use super::*;

fn can_view(program: &WorkoutProgram, subject: &Subject) -> bool {
    match subject.role {
        Role::Manager => true,
        Role::PersonalTrainer => program.personal_trainer_id == Some(subject.user_id),
        Role::Client => program.client_id == Some(subject.user_id),
    }
}

fn owns(program: &WorkoutProgram, subject: &Subject) -> bool {
    subject.role == Role::PersonalTrainer && program.personal_trainer_id == Some(subject.user_id)
}

pub(super) async fn create_program(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Json(payload): Json<NewWorkoutProgram>,
) -> Result<Json<WorkoutProgram>, Response> {
    if subject.role != Role::PersonalTrainer {
        return Err(forbidden());
    }
    if payload.name.trim().is_empty() {
        return Err(bad_request("name is required"));
    }
    let client_ok = state
        .accounts
        .read()
        .await
        .get(&payload.client_id)
        .is_some_and(|a| a.user.personal_trainer_id == Some(subject.user_id));
    if !client_ok {
        return Err(bad_request("clientId is not one of your clients"));
    }

    let program_id = state.next_id();
    let exercises = payload
        .exercises
        .into_iter()
        .map(|ex| exercise_from(&state, ex, program_id, subject.user_id))
        .collect();
    let program = WorkoutProgram {
        workout_program_id: program_id,
        name: payload.name,
        description: payload.description,
        exercises,
        personal_trainer_id: Some(subject.user_id),
        client_id: Some(payload.client_id),
    };
    state
        .programs
        .write()
        .await
        .insert(program_id, program.clone());
    tracing::info!(program_id, "workout program created");
    Ok(Json(program))
}

fn exercise_from(state: &AppState, ex: NewExercise, program_id: i64, trainer_id: i64) -> Exercise {
    Exercise {
        exercise_id: state.next_id(),
        name: ex.name,
        description: ex.description,
        sets: ex.sets,
        repetitions: ex.repetitions,
        time: ex.time,
        workout_program_id: Some(program_id),
        personal_trainer_id: Some(trainer_id),
    }
}

pub(super) async fn list_trainer_programs(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<Vec<WorkoutProgram>>, Response> {
    if subject.role != Role::PersonalTrainer {
        return Err(forbidden());
    }
    let programs = state.programs.read().await;
    Ok(Json(
        programs
            .values()
            .filter(|p| owns(p, &subject))
            .cloned()
            .collect(),
    ))
}

pub(super) async fn list_client_programs(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<WorkoutProgram>>, Response> {
    if subject.role == Role::Client && subject.user_id != client_id {
        return Err(forbidden());
    }
    let programs = state.programs.read().await;
    Ok(Json(
        programs
            .values()
            .filter(|p| p.client_id == Some(client_id) && can_view(p, &subject))
            .cloned()
            .collect(),
    ))
}

pub(super) async fn get_program(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutProgram>, Response> {
    let programs = state.programs.read().await;
    match programs.get(&id) {
        Some(p) if can_view(p, &subject) => Ok(Json(p.clone())),
        Some(_) => Err(forbidden()),
        None => Err(not_found("workout program")),
    }
}

pub(super) async fn delete_program(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutProgram>, Response> {
    let mut programs = state.programs.write().await;
    match programs.get(&id) {
        Some(p) if owns(p, &subject) => {}
        Some(_) => return Err(forbidden()),
        None => return Err(not_found("workout program")),
    }
    let removed = programs
        .remove(&id)
        .ok_or_else(|| not_found("workout program"))?;
    tracing::info!(program_id = id, "workout program deleted");
    Ok(Json(removed))
}

pub(super) async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(program_id): Path<i64>,
    Json(payload): Json<NewExercise>,
) -> Result<Json<Exercise>, Response> {
    if payload.name.trim().is_empty() {
        return Err(bad_request("name is required"));
    }
    let mut programs = state.programs.write().await;
    let Some(program) = programs.get_mut(&program_id) else {
        return Err(not_found("workout program"));
    };
    if !owns(program, &subject) {
        return Err(forbidden());
    }
    let exercise = exercise_from(&state, payload, program_id, subject.user_id);
    program.exercises.push(exercise.clone());
    Ok(Json(exercise))
}

pub(super) async fn list_exercises(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Json<Vec<Exercise>> {
    let programs = state.programs.read().await;
    Json(
        programs
            .values()
            .filter(|p| can_view(p, &subject))
            .flat_map(|p| p.exercises.iter().cloned())
            .collect(),
    )
}

pub(super) async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path((exercise_id, program_id)): Path<(i64, i64)>,
) -> Result<Json<Exercise>, Response> {
    let mut programs = state.programs.write().await;
    let Some(program) = programs.get_mut(&program_id) else {
        return Err(not_found("workout program"));
    };
    if !owns(program, &subject) {
        return Err(forbidden());
    }
    let Some(pos) = program
        .exercises
        .iter()
        .position(|e| e.exercise_id == exercise_id)
    else {
        return Err(not_found("exercise"));
    };
    Ok(Json(program.exercises.remove(pos)))
}
