use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecom_auth_types::identity::Identity;
use ecom_domain::money::format_usd;

use crate::domain::types::{OrderDetail, OrderItem, Product};
use crate::error::AdminServiceError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::usecase::checkout::{CheckoutInput, CheckoutUseCase};
use crate::usecase::order::ListOrdersUseCase;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product: OrderProductResponse,
}

impl From<(OrderItem, Product)> for OrderItemResponse {
    fn from((item, product): (OrderItem, Product)) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product: OrderProductResponse {
                id: product.id,
                name: product.name,
                price: product.price,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub is_paid: bool,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItemResponse>,
    /// Product names joined with ", ".
    pub products: String,
    /// Sum of item prices formatted as USD, e.g. `"$1,024.50"`.
    pub total_price: String,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "ecom_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<OrderDetail> for OrderResponse {
    fn from(detail: OrderDetail) -> Self {
        let products = detail.summary();
        let total_price = format_usd(detail.total());
        let OrderDetail { order, lines } = detail;
        Self {
            id: order.id,
            store_id: order.store_id,
            is_paid: order.is_paid,
            phone: order.phone,
            address: order.address,
            items: lines.into_iter().map(Into::into).collect(),
            products,
            total_price,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub product_ids: Vec<Uuid>,
}

// ── GET /api/{store_id}/orders ───────────────────────────────────────────────

pub async fn list_orders(
    identity: Identity,
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AdminServiceError> {
    let usecase = ListOrdersUseCase {
        stores: state.store_repo(),
        orders: state.order_repo(),
    };
    let orders = usecase.execute(identity.user_id, store_id).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// ── POST /api/{store_id}/checkout ────────────────────────────────────────────

pub async fn checkout(
    AppPath(store_id): AppPath<Uuid>,
    State(state): State<AppState>,
    AppJson(body): AppJson<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AdminServiceError> {
    let usecase = CheckoutUseCase {
        stores: state.store_repo(),
        products: state.product_repo(),
        orders: state.order_repo(),
    };
    let order = usecase
        .execute(
            store_id,
            CheckoutInput {
                product_ids: body.product_ids,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── OPTIONS /api/{store_id}/checkout ─────────────────────────────────────────

/// Bare `OPTIONS` without preflight headers; the CORS layer answers real preflights.
pub async fn checkout_options() -> StatusCode {
    StatusCode::NO_CONTENT
}
