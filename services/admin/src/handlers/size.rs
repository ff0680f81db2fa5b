use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::Size;
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::size::{
    CreateSizeUseCase, DeleteSizeUseCase, GetSizeUseCase, ListSizesUseCase, SizeInput,
    UpdateSizeUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Size> for SizeResponse {
    fn from(size: Size) -> Self {
        Self {
            id: size.id,
            store_id: size.store_id,
            name: size.name,
            value: size.value,
            created_at: size.created_at,
            updated_at: size.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct SizeRequest {
    pub name: String,
    pub value: String,
}

impl From<SizeRequest> for SizeInput {
    fn from(body: SizeRequest) -> Self {
        Self {
            name: body.name,
            value: body.value,
        }
    }
}

// ── GET /api/{store_id}/sizes ────────────────────────────────────────────────

pub async fn list_sizes(
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SizeResponse>>, AdminServiceError> {
    let usecase = ListSizesUseCase {
        sizes: state.size_repo(),
    };
    let sizes = usecase.execute(store_id).await?;
    Ok(Json(sizes.into_iter().map(Into::into).collect()))
}

// ── GET /api/{store_id}/sizes/{id} ───────────────────────────────────────────

pub async fn get_size(
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<SizeResponse>, AdminServiceError> {
    let usecase = GetSizeUseCase {
        sizes: state.size_repo(),
    };
    let size = usecase.execute(store_id, id).await?;
    Ok(Json(size.into()))
}

// ── POST /api/{store_id}/sizes ───────────────────────────────────────────────

pub async fn create_size(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<SizeRequest>,
) -> Result<(StatusCode, Json<SizeResponse>), AdminServiceError> {
    let usecase = CreateSizeUseCase {
        stores: state.store_repo(),
        sizes: state.size_repo(),
    };
    let size = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(size.into())))
}

// ── PATCH /api/{store_id}/sizes/{id} ─────────────────────────────────────────

pub async fn update_size(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    AppJson(body): AppJson<SizeRequest>,
) -> Result<Json<SizeResponse>, AdminServiceError> {
    let usecase = UpdateSizeUseCase {
        stores: state.store_repo(),
        sizes: state.size_repo(),
    };
    let size = usecase
        .execute(identity.user_id, store_id, id, body.into())
        .await?;
    Ok(Json(size.into()))
}

// ── DELETE /api/{store_id}/sizes/{id} ────────────────────────────────────────

pub async fn delete_size(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<SizeResponse>, AdminServiceError> {
    let usecase = DeleteSizeUseCase {
        stores: state.store_repo(),
        sizes: state.size_repo(),
    };
    let size = usecase.execute(identity.user_id, store_id, id).await?;
    Ok(Json(size.into()))
}
