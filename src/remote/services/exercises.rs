use super::*;
use crate::model::{Exercise, NewExercise};
use crate::remote::Method;

impl<S: TokenStore> FitnessService<S> {
    pub fn add_exercise(
        &self,
        program_id: i64,
        exercise: &NewExercise,
    ) -> Result<Exercise, ApiError> {
        let token = self.require_token()?;
        if program_id == 0 {
            return Err(ApiError::Validation("Program ID is required.".to_string()));
        }
        self.api.call(
            Method::Post,
            &format!("/Exercises/Program/{}", program_id),
            &token,
            Some(exercise),
        )
    }

    pub fn list_exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        let token = self.require_token()?;
        self.api.get("/Exercises", &token)
    }

    pub fn delete_exercise(
        &self,
        program_id: i64,
        exercise_id: i64,
    ) -> Result<Option<Exercise>, ApiError> {
        let token = self.require_token()?;
        self.api.delete(
            &format!("/Exercises/{}/Program/{}", exercise_id, program_id),
            &token,
        )
    }
}
