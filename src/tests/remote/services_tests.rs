use super::*;
use crate::model::{NewAccount, NewExercise, NewWorkoutProgram, UnverifiedClaims};
use crate::store::MemoryTokenStore;
use crate::token::encode_unsigned_token;

// Nothing listens here, so any request that is actually sent fails with a
// transport error rather than `NoToken`.
const DEAD_API: &str = "http://127.0.0.1:1/api";

fn service(store: MemoryTokenStore) -> FitnessService<MemoryTokenStore> {
    FitnessService::new(ApiClient::new(DEAD_API).unwrap(), store)
}

fn token_for(role: &str) -> String {
    encode_unsigned_token(&UnverifiedClaims {
        user_id: "5".to_string(),
        name: "Someone".to_string(),
        email: "someone@example.com".to_string(),
        role: role.to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn every_authenticated_service_fails_fast_without_a_token() {
    let svc = service(MemoryTokenStore::new());
    let account = NewAccount {
        first_name: "A".into(),
        last_name: "B".into(),
        email: "a@b.c".into(),
        password: "pw".into(),
    };
    let program = NewWorkoutProgram {
        name: "p".into(),
        description: "d".into(),
        exercises: Vec::new(),
        personal_trainer_id: 1,
        client_id: 2,
    };
    let exercise = NewExercise {
        name: "squat".into(),
        description: "low".into(),
        sets: 3,
        repetitions: Some(10),
        time: None,
        workout_program_id: 1,
        personal_trainer_id: 1,
    };

    let results: Vec<Result<(), ApiError>> = vec![
        svc.create_client(account.clone(), 1).map(drop),
        svc.create_trainer(account).map(drop),
        svc.list_users().map(drop),
        svc.list_clients().map(drop),
        svc.get_trainer().map(drop),
        svc.delete_client(3).map(drop),
        svc.create_workout_program(&program).map(drop),
        svc.list_trainer_programs().map(drop),
        svc.list_client_programs().map(drop),
        svc.get_workout_program(1).map(drop),
        svc.delete_workout_program(1).map(drop),
        svc.add_exercise(1, &exercise).map(drop),
        svc.list_exercises().map(drop),
        svc.delete_exercise(1, 2).map(drop),
    ];
    for r in results {
        assert!(matches!(r, Err(ApiError::NoToken)), "got {:?}", r);
    }
}

#[test]
fn no_token_message_matches_login_prompt() {
    assert_eq!(
        ApiError::NoToken.to_string(),
        "No valid token found. Please log in."
    );
}

#[test]
fn client_programs_refuse_non_client_tokens_locally() {
    let svc = service(MemoryTokenStore::with_token(&token_for("PersonalTrainer")));
    let err = svc.list_client_programs().unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(err.to_string(), "Unauthorized access. You must be a client.");
}

#[test]
fn add_exercise_requires_program_id() {
    let svc = service(MemoryTokenStore::with_token(&token_for("PersonalTrainer")));
    let exercise = NewExercise {
        name: "plank".into(),
        description: "hold".into(),
        sets: 2,
        repetitions: None,
        time: Some("60s".into()),
        workout_program_id: 0,
        personal_trainer_id: 5,
    };
    let err = svc.add_exercise(0, &exercise).unwrap_err();
    assert_eq!(err.to_string(), "Program ID is required.");
}

#[test]
fn logout_clears_the_store() {
    let svc = service(MemoryTokenStore::with_token(&token_for("Client")));
    assert!(svc.store().get().is_some());
    svc.logout();
    assert!(svc.store().get().is_none());
}
