use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::Store;
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::store::{
    CreateStoreUseCase, DeleteStoreUseCase, GetStoreUseCase, ListStoresUseCase, StoreInput,
    UpdateStoreUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            user_id: store.user_id,
            name: store.name,
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct StoreRequest {
    pub name: String,
}

impl From<StoreRequest> for StoreInput {
    fn from(body: StoreRequest) -> Self {
        Self { name: body.name }
    }
}

// ── GET /api/stores ──────────────────────────────────────────────────────────

pub async fn list_stores(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreResponse>>, AdminServiceError> {
    let usecase = ListStoresUseCase {
        stores: state.store_repo(),
    };
    let stores = usecase.execute(identity.user_id).await?;
    Ok(Json(stores.into_iter().map(Into::into).collect()))
}

// ── POST /api/stores ─────────────────────────────────────────────────────────

pub async fn create_store(
    identity: Identity,
    State(state): State<AppState>,
    AppJson(body): AppJson<StoreRequest>,
) -> Result<(StatusCode, Json<StoreResponse>), AdminServiceError> {
    let usecase = CreateStoreUseCase {
        stores: state.store_repo(),
    };
    let store = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(store.into())))
}

// ── GET /api/stores/{store_id} ───────────────────────────────────────────────

pub async fn get_store(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<StoreResponse>, AdminServiceError> {
    let usecase = GetStoreUseCase {
        stores: state.store_repo(),
    };
    let store = usecase.execute(identity.user_id, store_id).await?;
    Ok(Json(store.into()))
}

// ── PATCH /api/stores/{store_id} ─────────────────────────────────────────────

pub async fn update_store(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<StoreRequest>,
) -> Result<Json<StoreResponse>, AdminServiceError> {
    let usecase = UpdateStoreUseCase {
        stores: state.store_repo(),
    };
    let store = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok(Json(store.into()))
}

// ── DELETE /api/stores/{store_id} ────────────────────────────────────────────

pub async fn delete_store(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<StoreResponse>, AdminServiceError> {
    let usecase = DeleteStoreUseCase {
        stores: state.store_repo(),
    };
    let store = usecase.execute(identity.user_id, store_id).await?;
    Ok(Json(store.into()))
}
