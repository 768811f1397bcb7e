use super::*;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateUserRequest {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    personal_trainer_id: Option<i64>,
    #[serde(default)]
    account_type: String,
}

pub(super) async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>, Response> {
    let Some(account_type) = Role::parse(&payload.account_type) else {
        return Err(bad_request("unknown accountType"));
    };
    // Managers create trainers; trainers create their own clients.
    let personal_trainer_id = match (subject.role, account_type) {
        (Role::Manager, Role::PersonalTrainer) => None,
        (Role::PersonalTrainer, Role::Client) => {
            Some(payload.personal_trainer_id.unwrap_or(subject.user_id))
        }
        _ => return Err(forbidden()),
    };
    if personal_trainer_id.is_some_and(|id| id != subject.user_id) {
        return Err(forbidden());
    }
    if [
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &payload.password,
    ]
    .iter()
    .any(|v| v.trim().is_empty())
    {
        return Err(bad_request("firstName, lastName, email and password are required"));
    }

    let mut accounts = state.accounts.write().await;
    if accounts
        .values()
        .any(|a| a.user.email.eq_ignore_ascii_case(&payload.email))
    {
        return Err(conflict("email already in use"));
    }
    let user = User {
        user_id: state.next_id(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        personal_trainer_id,
        account_type: account_type.as_str().to_string(),
    };
    accounts.insert(
        user.user_id,
        Account {
            user: user.clone(),
            password: payload.password,
        },
    );
    tracing::info!(user_id = user.user_id, role = %account_type, "user created");
    Ok(Json(user))
}

pub(super) async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<Vec<User>>, Response> {
    if subject.role != Role::Manager {
        return Err(forbidden());
    }
    let accounts = state.accounts.read().await;
    Ok(Json(accounts.values().map(|a| a.user.clone()).collect()))
}

pub(super) async fn list_clients(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<Vec<User>>, Response> {
    if subject.role != Role::PersonalTrainer {
        return Err(forbidden());
    }
    let accounts = state.accounts.read().await;
    Ok(Json(
        accounts
            .values()
            .filter(|a| a.user.personal_trainer_id == Some(subject.user_id))
            .map(|a| a.user.clone())
            .collect(),
    ))
}

pub(super) async fn get_trainer(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<User>, Response> {
    let accounts = state.accounts.read().await;
    accounts
        .get(&subject.user_id)
        .and_then(|a| a.user.personal_trainer_id)
        .and_then(|id| accounts.get(&id))
        .map(|a| Json(a.user.clone()))
        .ok_or_else(|| not_found("personal trainer"))
}

pub(super) async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<User>, Response> {
    let mut accounts = state.accounts.write().await;
    let Some(target) = accounts.get(&id) else {
        return Err(not_found("user"));
    };
    let allowed = match subject.role {
        Role::Manager => id != subject.user_id,
        Role::PersonalTrainer => target.user.personal_trainer_id == Some(subject.user_id),
        Role::Client => false,
    };
    if !allowed {
        return Err(forbidden());
    }
    let removed = accounts.remove(&id).map(|a| a.user).ok_or_else(|| not_found("user"))?;
    drop(accounts);

    state
        .programs
        .write()
        .await
        .retain(|_, p| p.client_id != Some(id) && p.personal_trainer_id != Some(id));
    tracing::info!(user_id = id, "user deleted");
    Ok(Json(removed))
}
