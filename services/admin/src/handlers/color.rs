use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::Color;
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::color::{
    ColorInput, CreateColorUseCase, DeleteColorUseCase, GetColorUseCase, ListColorsUseCase,
    UpdateColorUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Color> for ColorResponse {
    fn from(color: Color) -> Self {
        Self {
            id: color.id,
            store_id: color.store_id,
            name: color.name,
            value: color.value,
            created_at: color.created_at,
            updated_at: color.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct ColorRequest {
    pub name: String,
    pub value: String,
}

impl From<ColorRequest> for ColorInput {
    fn from(body: ColorRequest) -> Self {
        Self {
            name: body.name,
            value: body.value,
        }
    }
}

// ── GET /api/{store_id}/colors ───────────────────────────────────────────────

pub async fn list_colors(
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ColorResponse>>, AdminServiceError> {
    let usecase = ListColorsUseCase {
        colors: state.color_repo(),
    };
    let colors = usecase.execute(store_id).await?;
    Ok(Json(colors.into_iter().map(Into::into).collect()))
}

// ── GET /api/{store_id}/colors/{id} ──────────────────────────────────────────

pub async fn get_color(
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<ColorResponse>, AdminServiceError> {
    let usecase = GetColorUseCase {
        colors: state.color_repo(),
    };
    let color = usecase.execute(store_id, id).await?;
    Ok(Json(color.into()))
}

// ── POST /api/{store_id}/colors ──────────────────────────────────────────────

pub async fn create_color(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<ColorRequest>,
) -> Result<(StatusCode, Json<ColorResponse>), AdminServiceError> {
    let usecase = CreateColorUseCase {
        stores: state.store_repo(),
        colors: state.color_repo(),
    };
    let color = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(color.into())))
}

// ── PATCH /api/{store_id}/colors/{id} ────────────────────────────────────────

pub async fn update_color(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    AppJson(body): AppJson<ColorRequest>,
) -> Result<Json<ColorResponse>, AdminServiceError> {
    let usecase = UpdateColorUseCase {
        stores: state.store_repo(),
        colors: state.color_repo(),
    };
    let color = usecase
        .execute(identity.user_id, store_id, id, body.into())
        .await?;
    Ok(Json(color.into()))
}

// ── DELETE /api/{store_id}/colors/{id} ───────────────────────────────────────

pub async fn delete_color(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<ColorResponse>, AdminServiceError> {
    let usecase = DeleteColorUseCase {
        stores: state.store_repo(),
        colors: state.color_repo(),
    };
    let color = usecase.execute(identity.user_id, store_id, id).await?;
    Ok(Json(color.into()))
}
