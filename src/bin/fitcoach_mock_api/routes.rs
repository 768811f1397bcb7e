use super::*;

/// Everything under `/api`: the public login route plus the bearer-guarded
/// resource routes, all counted.
pub(super) fn api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let authed = Router::new()
        .route("/Users", get(list_users).post(create_user))
        .route("/Users/Clients", get(list_clients))
        .route("/Users/Trainer", get(get_trainer))
        .route("/Users/:id", delete(delete_user))
        .route("/WorkoutPrograms", post(create_program))
        .route("/WorkoutPrograms/trainer", get(list_trainer_programs))
        .route("/WorkoutPrograms/client/:id", get(list_client_programs))
        .route(
            "/WorkoutPrograms/:id",
            get(get_program).delete(delete_program),
        )
        .route("/Exercises", get(list_exercises))
        .route("/Exercises/Program/:id", post(add_exercise))
        .route(
            "/Exercises/:exercise_id/Program/:program_id",
            delete(delete_exercise),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/Users/login", post(login))
        .merge(authed)
        .layer(middleware::from_fn_with_state(state, count_requests))
}
