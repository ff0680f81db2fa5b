use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::Billboard;
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::billboard::{
    BillboardInput, CreateBillboardUseCase, DeleteBillboardUseCase, GetBillboardUseCase,
    ListBillboardsUseCase, UpdateBillboardUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Billboard> for BillboardResponse {
    fn from(billboard: Billboard) -> Self {
        Self {
            id: billboard.id,
            store_id: billboard.store_id,
            label: billboard.label,
            image_url: billboard.image_url,
            created_at: billboard.created_at,
            updated_at: billboard.updated_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardRequest {
    pub label: String,
    pub image_url: String,
}

impl From<BillboardRequest> for BillboardInput {
    fn from(body: BillboardRequest) -> Self {
        Self {
            label: body.label,
            image_url: body.image_url,
        }
    }
}

// ── GET /api/{store_id}/billboards ───────────────────────────────────────────

pub async fn list_billboards(
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BillboardResponse>>, AdminServiceError> {
    let usecase = ListBillboardsUseCase {
        billboards: state.billboard_repo(),
    };
    let billboards = usecase.execute(store_id).await?;
    Ok(Json(billboards.into_iter().map(Into::into).collect()))
}

// ── GET /api/{store_id}/billboards/{id} ──────────────────────────────────────

pub async fn get_billboard(
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<BillboardResponse>, AdminServiceError> {
    let usecase = GetBillboardUseCase {
        billboards: state.billboard_repo(),
    };
    let billboard = usecase.execute(store_id, id).await?;
    Ok(Json(billboard.into()))
}

// ── POST /api/{store_id}/billboards ──────────────────────────────────────────

pub async fn create_billboard(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<BillboardRequest>,
) -> Result<(StatusCode, Json<BillboardResponse>), AdminServiceError> {
    let usecase = CreateBillboardUseCase {
        stores: state.store_repo(),
        billboards: state.billboard_repo(),
    };
    let billboard = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(billboard.into())))
}

// ── PATCH /api/{store_id}/billboards/{id} ────────────────────────────────────

pub async fn update_billboard(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    AppJson(body): AppJson<BillboardRequest>,
) -> Result<Json<BillboardResponse>, AdminServiceError> {
    let usecase = UpdateBillboardUseCase {
        stores: state.store_repo(),
        billboards: state.billboard_repo(),
    };
    let billboard = usecase
        .execute(identity.user_id, store_id, id, body.into())
        .await?;
    Ok(Json(billboard.into()))
}

// ── DELETE /api/{store_id}/billboards/{id} ───────────────────────────────────

pub async fn delete_billboard(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<BillboardResponse>, AdminServiceError> {
    let usecase = DeleteBillboardUseCase {
        stores: state.store_repo(),
        billboards: state.billboard_repo(),
    };
    let billboard = usecase.execute(identity.user_id, store_id, id).await?;
    Ok(Json(billboard.into()))
}
