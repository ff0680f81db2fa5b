use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::extract::AppJson;
use crate::handlers::session::UserResponse;
use crate::state::AppState;
use crate::usecase::register::{RegisterInput, RegisterUseCase};

// ── POST /api/register ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthServiceError> {
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(RegisterInput {
            name: body.name,
            username: body.username,
            email: body.email,
            password: body.password,
            confirm: body.confirm,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
