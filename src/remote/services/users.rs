use super::*;
use crate::model::{NewAccount, Role, User};
use crate::remote::Method;

impl<S: TokenStore> FitnessService<S> {
    pub fn create_client(
        &self,
        account: NewAccount,
        personal_trainer_id: i64,
    ) -> Result<User, ApiError> {
        let token = self.require_token()?;
        let body = account.into_user(Role::Client, Some(personal_trainer_id));
        self.api.call(Method::Post, "/Users", &token, Some(&body))
    }

    pub fn create_trainer(&self, account: NewAccount) -> Result<User, ApiError> {
        let token = self.require_token()?;
        let body = account.into_user(Role::PersonalTrainer, None);
        self.api.call(Method::Post, "/Users", &token, Some(&body))
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let token = self.require_token()?;
        self.api.get("/Users", &token)
    }

    /// Clients visible to the logged-in trainer.
    pub fn list_clients(&self) -> Result<Vec<User>, ApiError> {
        let token = self.require_token()?;
        self.api.get("/Users/Clients", &token)
    }

    /// The logged-in client's personal trainer.
    pub fn get_trainer(&self) -> Result<User, ApiError> {
        let token = self.require_token()?;
        match self.api.get("/Users/Trainer", &token) {
            Err(err) if err.status() == Some(404) => Err(ApiError::TrainerNotSet),
            other => other,
        }
    }

    pub fn delete_client(&self, user_id: i64) -> Result<Option<User>, ApiError> {
        let token = self.require_token()?;
        self.api.delete(&format!("/Users/{}", user_id), &token)
    }
}
