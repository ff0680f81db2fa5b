use uuid::Uuid;

use crate::domain::repository::{OrderRepository, StoreRepository};
use crate::domain::types::OrderDetail;
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<S: StoreRepository, O: OrderRepository> {
    pub stores: S,
    pub orders: O,
}

impl<S: StoreRepository, O: OrderRepository> ListOrdersUseCase<S, O> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> Result<Vec<OrderDetail>, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        self.orders.list(store_id).await
    }
}
