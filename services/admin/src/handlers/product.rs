use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;

use crate::domain::types::{Image, ProductDetail, ProductFilter};
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::category::CategoryResponse;
use crate::handlers::color::ColorResponse;
use crate::handlers::size::SizeResponse;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductInput, UpdateProductUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub url: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            url: image.url,
            created_at: image.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    /// Decimal string, e.g. `"12.50"`.
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ImageResponse>,
    pub category: Option<CategoryResponse>,
    pub size: Option<SizeResponse>,
    pub color: Option<ColorResponse>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<ProductDetail> for ProductResponse {
    fn from(detail: ProductDetail) -> Self {
        let ProductDetail {
            product,
            images,
            category,
            size,
            color,
        } = detail;
        Self {
            id: product.id,
            store_id: product.store_id,
            category_id: product.category_id,
            size_id: product.size_id,
            color_id: product.color_id,
            name: product.name,
            price: product.price,
            is_featured: product.is_featured,
            is_archived: product.is_archived,
            images: images.into_iter().map(Into::into).collect(),
            category: category.map(Into::into),
            size: size.map(Into::into),
            color: color.map(Into::into),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct ImageRequest {
    pub url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub images: Vec<ImageRequest>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl From<ProductRequest> for ProductInput {
    fn from(body: ProductRequest) -> Self {
        Self {
            name: body.name,
            price: body.price,
            category_id: body.category_id,
            size_id: body.size_id,
            color_id: body.color_id,
            images: body.images.into_iter().map(|image| image.url).collect(),
            is_featured: body.is_featured,
            is_archived: body.is_archived,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub is_featured: Option<String>,
}

/// Any non-empty value turns the filter on, `?isFeatured=false` included.
fn is_truthy(value: &str) -> bool {
    !value.is_empty()
}

impl From<ProductListQuery> for ProductFilter {
    fn from(query: ProductListQuery) -> Self {
        Self {
            category_id: query.category_id,
            size_id: query.size_id,
            color_id: query.color_id,
            featured_only: query.is_featured.as_deref().is_some_and(is_truthy),
        }
    }
}

// ── GET /api/{store_id}/products ─────────────────────────────────────────────

pub async fn list_products(
    AppPath(store_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ProductListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AdminServiceError> {
    let usecase = ListProductsUseCase {
        products: state.product_repo(),
    };
    let products = usecase.execute(store_id, query.into()).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── GET /api/{store_id}/products/{id} ────────────────────────────────────────

pub async fn get_product(
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AdminServiceError> {
    let usecase = GetProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase.execute(store_id, id).await?;
    Ok(Json(product.into()))
}

// ── POST /api/{store_id}/products ────────────────────────────────────────────

pub async fn create_product(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AdminServiceError> {
    let usecase = CreateProductUseCase {
        stores: state.store_repo(),
        products: state.product_repo(),
        categories: state.category_repo(),
        sizes: state.size_repo(),
        colors: state.color_repo(),
    };
    let product = usecase
        .execute(identity.user_id, store_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── PATCH /api/{store_id}/products/{id} ──────────────────────────────────────

pub async fn update_product(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    AppJson(body): AppJson<ProductRequest>,
) -> Result<Json<ProductResponse>, AdminServiceError> {
    let usecase = UpdateProductUseCase {
        stores: state.store_repo(),
        products: state.product_repo(),
        categories: state.category_repo(),
        sizes: state.size_repo(),
        colors: state.color_repo(),
    };
    let product = usecase
        .execute(identity.user_id, store_id, id, body.into())
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /api/{store_id}/products/{id} ─────────────────────────────────────

pub async fn delete_product(
    identity: Identity,
    AppPath((store_id, id)): AppPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AdminServiceError> {
    let usecase = DeleteProductUseCase {
        stores: state.store_repo(),
        products: state.product_repo(),
    };
    let product = usecase.execute(identity.user_id, store_id, id).await?;
    Ok(Json(product.into()))
}
