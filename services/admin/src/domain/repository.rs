#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Billboard, Category, CategoryDetail, Color, Image, Order, OrderDetail, OrderItem, Product,
    ProductDetail, ProductFilter, Size, Store,
};
use crate::error::AdminServiceError;

// Lookups, updates and deletes of catalog rows are always scoped by store id:
// a row that exists under a different store is reported as absent.

/// Repository for stores.
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, AdminServiceError>;

    /// Stores owned by `user_id`, oldest first.
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Store>, AdminServiceError>;

    async fn create(&self, store: &Store) -> Result<(), AdminServiceError>;

    async fn update(&self, store: &Store) -> Result<(), AdminServiceError>;

    /// Delete a store and, by cascade, everything it owns.
    async fn delete(&self, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for billboards.
pub trait BillboardRepository: Send + Sync {
    /// Billboards of a store, newest first.
    async fn list(&self, store_id: Uuid) -> Result<Vec<Billboard>, AdminServiceError>;

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Billboard>, AdminServiceError>;

    async fn create(&self, billboard: &Billboard) -> Result<(), AdminServiceError>;

    async fn update(&self, billboard: &Billboard) -> Result<(), AdminServiceError>;

    /// Fails with `InUse` while a category still points at the billboard.
    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for categories.
pub trait CategoryRepository: Send + Sync {
    /// Categories of a store with their billboard, newest first.
    async fn list(&self, store_id: Uuid) -> Result<Vec<CategoryDetail>, AdminServiceError>;

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CategoryDetail>, AdminServiceError>;

    async fn create(&self, category: &Category) -> Result<(), AdminServiceError>;

    async fn update(&self, category: &Category) -> Result<(), AdminServiceError>;

    /// Fails with `InUse` while a product is still filed under the category.
    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for sizes.
pub trait SizeRepository: Send + Sync {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Size>, AdminServiceError>;

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Size>, AdminServiceError>;

    async fn create(&self, size: &Size) -> Result<(), AdminServiceError>;

    async fn update(&self, size: &Size) -> Result<(), AdminServiceError>;

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for colors.
pub trait ColorRepository: Send + Sync {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Color>, AdminServiceError>;

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Color>, AdminServiceError>;

    async fn create(&self, color: &Color) -> Result<(), AdminServiceError>;

    async fn update(&self, color: &Color) -> Result<(), AdminServiceError>;

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for products and their images.
pub trait ProductRepository: Send + Sync {
    /// Products of a store matching `filter`, newest first.
    async fn list(
        &self,
        store_id: Uuid,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductDetail>, AdminServiceError>;

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ProductDetail>, AdminServiceError>;

    /// Products of a store among `ids`, archived ones included.
    async fn find_many(
        &self,
        store_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, AdminServiceError>;

    /// Insert the product and its images in one transaction.
    async fn create(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError>;

    /// Update the product and replace its whole image set in one transaction.
    async fn update(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError>;

    /// Images cascade. Fails with `InUse` while an order item references the product.
    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    /// Orders of a store with their items and products, newest first.
    async fn list(&self, store_id: Uuid) -> Result<Vec<OrderDetail>, AdminServiceError>;

    /// Insert the order and its items in one transaction.
    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<(), AdminServiceError>;
}
