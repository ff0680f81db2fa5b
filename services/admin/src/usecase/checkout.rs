use std::collections::{HashMap, HashSet};

use chrono::Utc;
use uuid::Uuid;

use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{OrderRepository, ProductRepository, StoreRepository};
use crate::domain::types::{Order, OrderDetail, OrderItem, Product};
use crate::error::AdminServiceError;

/// First occurrence of each id, in request order.
fn distinct_in_order(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

pub struct CheckoutInput {
    /// One order item per entry; repeating an id orders the product again.
    pub product_ids: Vec<Uuid>,
}

// ── Checkout ─────────────────────────────────────────────────────────────────

pub struct CheckoutUseCase<S, P, O>
where
    S: StoreRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub stores: S,
    pub products: P,
    pub orders: O,
}

impl<S, P, O> CheckoutUseCase<S, P, O>
where
    S: StoreRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    /// Record a paid order for products of a public storefront.
    pub async fn execute(
        &self,
        store_id: Uuid,
        input: CheckoutInput,
    ) -> Result<OrderDetail, AdminServiceError> {
        if input.product_ids.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.push("productIds", "productIds is required");
            return Err(errors.into());
        }
        if self.stores.find_by_id(store_id).await?.is_none() {
            return Err(AdminServiceError::InvalidStore);
        }

        let distinct = distinct_in_order(&input.product_ids);
        let available: HashMap<Uuid, Product> = self
            .products
            .find_many(store_id, &distinct)
            .await?
            .into_iter()
            .filter(|p| !p.is_archived)
            .map(|p| (p.id, p))
            .collect();

        let mut errors = ValidationErrors::new();
        for id in &distinct {
            if !available.contains_key(id) {
                errors.push("productIds", format!("product {id} is not available"));
            }
        }
        errors.into_result()?;

        let now = Utc::now();
        let order = Order {
            id: Uuid::now_v7(),
            store_id,
            is_paid: true,
            phone: String::new(),
            address: String::new(),
            created_at: now,
            updated_at: now,
        };
        let lines: Vec<(OrderItem, Product)> = input
            .product_ids
            .iter()
            .filter_map(|id| available.get(id))
            .map(|product| {
                let item = OrderItem {
                    id: Uuid::now_v7(),
                    order_id: order.id,
                    product_id: product.id,
                };
                (item, product.clone())
            })
            .collect();
        let items: Vec<OrderItem> = lines.iter().map(|(item, _)| item.clone()).collect();
        self.orders.create(&order, &items).await?;

        tracing::info!(%store_id, order_id = %order.id, items = items.len(), "checked out order");
        Ok(OrderDetail { order, lines })
    }
}
