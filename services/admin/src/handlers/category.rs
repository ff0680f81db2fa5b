use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::{Category, CategoryDetail};
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::handlers::billboard::BillboardResponse;
use crate::state::AppState;
use crate::usecase::category::{
    CategoryInput, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    /// Present on category endpoints; omitted where a category is embedded in a product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billboard: Option<BillboardResponse>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            store_id: category.store_id,
            billboard_id: category.billboard_id,
            name: category.name,
            billboard: None,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<CategoryDetail> for CategoryResponse {
    fn from(detail: CategoryDetail) -> Self {
        Self {
            billboard: detail.billboard.map(Into::into),
            ..detail.category.into()
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    pub billboard_id: Uuid,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(body: CategoryRequest) -> Self {
        Self {
            name: body.name,
            billboard_id: body.billboard_id,
        }
    }
}

// ── GET /api/{store_id}/categories ───────────────────────────────────────────

pub async fn list_categories(
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AdminServiceError> {
    let usecase = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = usecase.execute(store_id).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

// ── GET /api/{store_id}/categories/{id} ──────────────────────────────────────

pub async fn get_category(
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AdminServiceError> {
    let usecase = GetCategoryUseCase {
        categories: state.category_repo(),
    };
    let category = usecase.execute(store_id, id).await?;
    Ok(Json(category.into()))
}

// ── POST /api/{store_id}/categories ──────────────────────────────────────────

pub async fn create_category(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AdminServiceError> {
    let usecase = CreateCategoryUseCase {
        stores: state.store_repo(),
        categories: state.category_repo(),
        billboards: state.billboard_repo(),
    };
    let category = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

// ── PATCH /api/{store_id}/categories/{id} ────────────────────────────────────

pub async fn update_category(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    AppJson(body): AppJson<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AdminServiceError> {
    let usecase = UpdateCategoryUseCase {
        stores: state.store_repo(),
        categories: state.category_repo(),
        billboards: state.billboard_repo(),
    };
    let category = usecase
        .execute(identity.user_id, store_id, id, body.into())
        .await?;
    Ok(Json(category.into()))
}

// ── DELETE /api/{store_id}/categories/{id} ───────────────────────────────────

pub async fn delete_category(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AdminServiceError> {
    let usecase = DeleteCategoryUseCase {
        stores: state.store_repo(),
        categories: state.category_repo(),
    };
    let category = usecase.execute(identity.user_id, store_id, id).await?;
    Ok(Json(category.into()))
}
