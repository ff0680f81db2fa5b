use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::session::GetSessionUseCase;

/// Public view of an account. Never includes the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub username: Option<String>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

// ── GET /api/auth/session ────────────────────────────────────────────────────

pub async fn get_session(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = GetSessionUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
