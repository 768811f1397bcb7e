use super::*;
use crate::model::{NewWorkoutProgram, Role, WorkoutProgram};
use crate::remote::Method;
use crate::token::decode_claims;

impl<S: TokenStore> FitnessService<S> {
    pub fn create_workout_program(
        &self,
        program: &NewWorkoutProgram,
    ) -> Result<WorkoutProgram, ApiError> {
        let token = self.require_token()?;
        self.api
            .call(Method::Post, "/WorkoutPrograms", &token, Some(program))
    }

    pub fn list_trainer_programs(&self) -> Result<Vec<WorkoutProgram>, ApiError> {
        let token = self.require_token()?;
        self.api.get("/WorkoutPrograms/trainer", &token)
    }

    /// Programs assigned to the logged-in client, looked up by the token's
    /// `UserId`. Refuses locally when the token is not a client token.
    pub fn list_client_programs(&self) -> Result<Vec<WorkoutProgram>, ApiError> {
        let token = self.require_token()?;
        let claims = decode_claims(&token)
            .filter(|c| c.role() == Some(Role::Client))
            .ok_or_else(|| {
                ApiError::Unauthorized("Unauthorized access. You must be a client.".to_string())
            })?;
        self.api.get(
            &format!("/WorkoutPrograms/client/{}", claims.user_id),
            &token,
        )
    }

    pub fn get_workout_program(&self, program_id: i64) -> Result<WorkoutProgram, ApiError> {
        let token = self.require_token()?;
        self.api
            .get(&format!("/WorkoutPrograms/{}", program_id), &token)
    }

    pub fn delete_workout_program(
        &self,
        program_id: i64,
    ) -> Result<Option<WorkoutProgram>, ApiError> {
        let token = self.require_token()?;
        self.api
            .delete(&format!("/WorkoutPrograms/{}", program_id), &token)
    }
}
