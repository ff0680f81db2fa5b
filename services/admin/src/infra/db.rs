use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder, QueryTrait, Select, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use ecom_admin_schema::{
    billboards, categories, colors, images, order_items, orders, products, sizes, stores,
};

use crate::domain::repository::{
    BillboardRepository, CategoryRepository, ColorRepository, OrderRepository, ProductRepository,
    SizeRepository, StoreRepository,
};
use crate::domain::types::{
    Billboard, Category, CategoryDetail, Color, Image, Order, OrderDetail, OrderItem, Product,
    ProductDetail, ProductFilter, Size, Store,
};
use crate::error::AdminServiceError;

/// A delete blocked by a `NO ACTION` foreign key becomes `InUse`.
fn delete_error(err: DbErr, entity: &'static str) -> AdminServiceError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AdminServiceError::InUse(entity),
        _ => anyhow::Error::new(err).context(format!("delete {entity}")).into(),
    }
}

// ── Store repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStoreRepository {
    pub db: DatabaseConnection,
}

impl StoreRepository for DbStoreRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, AdminServiceError> {
        let model = stores::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find store by id")?;
        Ok(model.map(store_from_model))
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Store>, AdminServiceError> {
        let models = stores::Entity::find()
            .filter(stores::Column::UserId.eq(user_id))
            .order_by_asc(stores::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list stores by owner")?;
        Ok(models.into_iter().map(store_from_model).collect())
    }

    async fn create(&self, store: &Store) -> Result<(), AdminServiceError> {
        store_active_model(store)
            .insert(&self.db)
            .await
            .context("create store")?;
        Ok(())
    }

    async fn update(&self, store: &Store) -> Result<(), AdminServiceError> {
        store_active_model(store)
            .update(&self.db)
            .await
            .context("update store")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AdminServiceError> {
        stores::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "store"))?;
        Ok(())
    }
}

fn store_active_model(store: &Store) -> stores::ActiveModel {
    stores::ActiveModel {
        id: Set(store.id),
        user_id: Set(store.user_id),
        name: Set(store.name.clone()),
        created_at: Set(store.created_at),
        updated_at: Set(store.updated_at),
    }
}

fn store_from_model(model: stores::Model) -> Store {
    Store {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Billboard repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBillboardRepository {
    pub db: DatabaseConnection,
}

impl BillboardRepository for DbBillboardRepository {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Billboard>, AdminServiceError> {
        let models = billboards::Entity::find()
            .filter(billboards::Column::StoreId.eq(store_id))
            .order_by_desc(billboards::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list billboards")?;
        Ok(models.into_iter().map(billboard_from_model).collect())
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Billboard>, AdminServiceError> {
        let model = billboards::Entity::find_by_id(id)
            .filter(billboards::Column::StoreId.eq(store_id))
            .one(&self.db)
            .await
            .context("find billboard")?;
        Ok(model.map(billboard_from_model))
    }

    async fn create(&self, billboard: &Billboard) -> Result<(), AdminServiceError> {
        billboard_active_model(billboard)
            .insert(&self.db)
            .await
            .context("create billboard")?;
        Ok(())
    }

    async fn update(&self, billboard: &Billboard) -> Result<(), AdminServiceError> {
        billboard_active_model(billboard)
            .update(&self.db)
            .await
            .context("update billboard")?;
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        billboards::Entity::delete_many()
            .filter(billboards::Column::Id.eq(id))
            .filter(billboards::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "billboard"))?;
        Ok(())
    }
}

fn billboard_active_model(billboard: &Billboard) -> billboards::ActiveModel {
    billboards::ActiveModel {
        id: Set(billboard.id),
        store_id: Set(billboard.store_id),
        label: Set(billboard.label.clone()),
        image_url: Set(billboard.image_url.clone()),
        created_at: Set(billboard.created_at),
        updated_at: Set(billboard.updated_at),
    }
}

fn billboard_from_model(model: billboards::Model) -> Billboard {
    Billboard {
        id: model.id,
        store_id: model.store_id,
        label: model.label,
        image_url: model.image_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self, store_id: Uuid) -> Result<Vec<CategoryDetail>, AdminServiceError> {
        let rows = categories::Entity::find()
            .filter(categories::Column::StoreId.eq(store_id))
            .order_by_desc(categories::Column::CreatedAt)
            .find_also_related(billboards::Entity)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(rows
            .into_iter()
            .map(|(category, billboard)| CategoryDetail {
                category: category_from_model(category),
                billboard: billboard.map(billboard_from_model),
            })
            .collect())
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CategoryDetail>, AdminServiceError> {
        let row = categories::Entity::find_by_id(id)
            .filter(categories::Column::StoreId.eq(store_id))
            .find_also_related(billboards::Entity)
            .one(&self.db)
            .await
            .context("find category")?;
        Ok(row.map(|(category, billboard)| CategoryDetail {
            category: category_from_model(category),
            billboard: billboard.map(billboard_from_model),
        }))
    }

    async fn create(&self, category: &Category) -> Result<(), AdminServiceError> {
        category_active_model(category)
            .insert(&self.db)
            .await
            .context("create category")?;
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), AdminServiceError> {
        category_active_model(category)
            .update(&self.db)
            .await
            .context("update category")?;
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        categories::Entity::delete_many()
            .filter(categories::Column::Id.eq(id))
            .filter(categories::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "category"))?;
        Ok(())
    }
}

fn category_active_model(category: &Category) -> categories::ActiveModel {
    categories::ActiveModel {
        id: Set(category.id),
        store_id: Set(category.store_id),
        billboard_id: Set(category.billboard_id),
        name: Set(category.name.clone()),
        created_at: Set(category.created_at),
        updated_at: Set(category.updated_at),
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        store_id: model.store_id,
        billboard_id: model.billboard_id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Size repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSizeRepository {
    pub db: DatabaseConnection,
}

impl SizeRepository for DbSizeRepository {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Size>, AdminServiceError> {
        let models = sizes::Entity::find()
            .filter(sizes::Column::StoreId.eq(store_id))
            .order_by_desc(sizes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list sizes")?;
        Ok(models.into_iter().map(size_from_model).collect())
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Size>, AdminServiceError> {
        let model = sizes::Entity::find_by_id(id)
            .filter(sizes::Column::StoreId.eq(store_id))
            .one(&self.db)
            .await
            .context("find size")?;
        Ok(model.map(size_from_model))
    }

    async fn create(&self, size: &Size) -> Result<(), AdminServiceError> {
        size_active_model(size)
            .insert(&self.db)
            .await
            .context("create size")?;
        Ok(())
    }

    async fn update(&self, size: &Size) -> Result<(), AdminServiceError> {
        size_active_model(size)
            .update(&self.db)
            .await
            .context("update size")?;
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        sizes::Entity::delete_many()
            .filter(sizes::Column::Id.eq(id))
            .filter(sizes::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "size"))?;
        Ok(())
    }
}

fn size_active_model(size: &Size) -> sizes::ActiveModel {
    sizes::ActiveModel {
        id: Set(size.id),
        store_id: Set(size.store_id),
        name: Set(size.name.clone()),
        value: Set(size.value.clone()),
        created_at: Set(size.created_at),
        updated_at: Set(size.updated_at),
    }
}

fn size_from_model(model: sizes::Model) -> Size {
    Size {
        id: model.id,
        store_id: model.store_id,
        name: model.name,
        value: model.value,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Color repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbColorRepository {
    pub db: DatabaseConnection,
}

impl ColorRepository for DbColorRepository {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Color>, AdminServiceError> {
        let models = colors::Entity::find()
            .filter(colors::Column::StoreId.eq(store_id))
            .order_by_desc(colors::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list colors")?;
        Ok(models.into_iter().map(color_from_model).collect())
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Color>, AdminServiceError> {
        let model = colors::Entity::find_by_id(id)
            .filter(colors::Column::StoreId.eq(store_id))
            .one(&self.db)
            .await
            .context("find color")?;
        Ok(model.map(color_from_model))
    }

    async fn create(&self, color: &Color) -> Result<(), AdminServiceError> {
        color_active_model(color)
            .insert(&self.db)
            .await
            .context("create color")?;
        Ok(())
    }

    async fn update(&self, color: &Color) -> Result<(), AdminServiceError> {
        color_active_model(color)
            .update(&self.db)
            .await
            .context("update color")?;
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        colors::Entity::delete_many()
            .filter(colors::Column::Id.eq(id))
            .filter(colors::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "color"))?;
        Ok(())
    }
}

fn color_active_model(color: &Color) -> colors::ActiveModel {
    colors::ActiveModel {
        id: Set(color.id),
        store_id: Set(color.store_id),
        name: Set(color.name.clone()),
        value: Set(color.value.clone()),
        created_at: Set(color.created_at),
        updated_at: Set(color.updated_at),
    }
}

fn color_from_model(model: colors::Model) -> Color {
    Color {
        id: model.id,
        store_id: model.store_id,
        name: model.name,
        value: model.value,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl DbProductRepository {
    /// Batch-load images and referenced rows for a page of products.
    async fn details(
        &self,
        models: Vec<products::Model>,
    ) -> Result<Vec<ProductDetail>, AdminServiceError> {
        let images = models
            .load_many(images::Entity, &self.db)
            .await
            .context("load product images")?;
        let categories = models
            .load_one(categories::Entity, &self.db)
            .await
            .context("load product categories")?;
        let sizes = models
            .load_one(sizes::Entity, &self.db)
            .await
            .context("load product sizes")?;
        let colors = models
            .load_one(colors::Entity, &self.db)
            .await
            .context("load product colors")?;

        let rows = models
            .into_iter()
            .zip(images)
            .zip(categories)
            .zip(sizes)
            .zip(colors);
        Ok(rows
            .map(|((((product, mut images), category), size), color)| {
                images.sort_by_key(|image| image.id);
                ProductDetail {
                    product: product_from_model(product),
                    images: images.into_iter().map(image_from_model).collect(),
                    category: category.map(category_from_model),
                    size: size.map(size_from_model),
                    color: color.map(color_from_model),
                }
            })
            .collect())
    }
}

/// Unarchived products of a store matching `filter`, newest first.
fn product_list_query(store_id: Uuid, filter: &ProductFilter) -> Select<products::Entity> {
    products::Entity::find()
        .filter(products::Column::StoreId.eq(store_id))
        .filter(products::Column::IsArchived.eq(false))
        .apply_if(filter.category_id, |q, id| {
            q.filter(products::Column::CategoryId.eq(id))
        })
        .apply_if(filter.size_id, |q, id| q.filter(products::Column::SizeId.eq(id)))
        .apply_if(filter.color_id, |q, id| q.filter(products::Column::ColorId.eq(id)))
        .apply_if(filter.featured_only.then_some(true), |q, featured| {
            q.filter(products::Column::IsFeatured.eq(featured))
        })
        .order_by_desc(products::Column::CreatedAt)
}

impl ProductRepository for DbProductRepository {
    async fn list(
        &self,
        store_id: Uuid,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductDetail>, AdminServiceError> {
        let models = product_list_query(store_id, filter)
            .all(&self.db)
            .await
            .context("list products")?;
        self.details(models).await
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ProductDetail>, AdminServiceError> {
        let model = products::Entity::find_by_id(id)
            .filter(products::Column::StoreId.eq(store_id))
            .one(&self.db)
            .await
            .context("find product")?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(self.details(vec![model]).await?.pop())
    }

    async fn find_many(
        &self,
        store_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, AdminServiceError> {
        let models = products::Entity::find()
            .filter(products::Column::StoreId.eq(store_id))
            .filter(products::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find products by ids")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn create(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError> {
        let product = product_active_model(product);
        let images: Vec<_> = images.iter().map(image_active_model).collect();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    product.insert(txn).await?;
                    if !images.is_empty() {
                        images::Entity::insert_many(images).exec(txn).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create product")?;
        Ok(())
    }

    async fn update(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError> {
        let product_id = product.id;
        let product = product_active_model(product);
        let images: Vec<_> = images.iter().map(image_active_model).collect();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    product.update(txn).await?;
                    images::Entity::delete_many()
                        .filter(images::Column::ProductId.eq(product_id))
                        .exec(txn)
                        .await?;
                    if !images.is_empty() {
                        images::Entity::insert_many(images).exec(txn).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("update product")?;
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        products::Entity::delete_many()
            .filter(products::Column::Id.eq(id))
            .filter(products::Column::StoreId.eq(store_id))
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "product"))?;
        Ok(())
    }
}

fn product_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(product.id),
        store_id: Set(product.store_id),
        category_id: Set(product.category_id),
        size_id: Set(product.size_id),
        color_id: Set(product.color_id),
        name: Set(product.name.clone()),
        price: Set(product.price),
        is_featured: Set(product.is_featured),
        is_archived: Set(product.is_archived),
        created_at: Set(product.created_at),
        updated_at: Set(product.updated_at),
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        store_id: model.store_id,
        category_id: model.category_id,
        size_id: model.size_id,
        color_id: model.color_id,
        name: model.name,
        price: model.price,
        is_featured: model.is_featured,
        is_archived: model.is_archived,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn image_active_model(image: &Image) -> images::ActiveModel {
    images::ActiveModel {
        id: Set(image.id),
        product_id: Set(image.product_id),
        url: Set(image.url.clone()),
        created_at: Set(image.created_at),
        updated_at: Set(image.updated_at),
    }
}

fn image_from_model(model: images::Model) -> Image {
    Image {
        id: model.id,
        product_id: model.product_id,
        url: model.url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list(&self, store_id: Uuid) -> Result<Vec<OrderDetail>, AdminServiceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::StoreId.eq(store_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders")?;
        let items = models
            .load_many(order_items::Entity, &self.db)
            .await
            .context("load order items")?;

        let product_ids: Vec<Uuid> = items.iter().flatten().map(|i| i.product_id).collect();
        let products: HashMap<Uuid, Product> = if product_ids.is_empty() {
            HashMap::new()
        } else {
            products::Entity::find()
                .filter(products::Column::Id.is_in(product_ids))
                .all(&self.db)
                .await
                .context("load ordered products")?
                .into_iter()
                .map(|model| (model.id, product_from_model(model)))
                .collect()
        };

        Ok(models
            .into_iter()
            .zip(items)
            .map(|(order, mut items)| {
                items.sort_by_key(|item| item.id);
                let lines = items
                    .into_iter()
                    .filter_map(|item| {
                        let product = products.get(&item.product_id)?.clone();
                        Some((order_item_from_model(item), product))
                    })
                    .collect();
                OrderDetail {
                    order: order_from_model(order),
                    lines,
                }
            })
            .collect())
    }

    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<(), AdminServiceError> {
        let order = orders::ActiveModel {
            id: Set(order.id),
            store_id: Set(order.store_id),
            is_paid: Set(order.is_paid),
            phone: Set(order.phone.clone()),
            address: Set(order.address.clone()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        };
        let items: Vec<_> = items
            .iter()
            .map(|item| order_items::ActiveModel {
                id: Set(item.id),
                order_id: Set(item.order_id),
                product_id: Set(item.product_id),
            })
            .collect();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    order.insert(txn).await?;
                    if !items.is_empty() {
                        order_items::Entity::insert_many(items).exec(txn).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create order")?;
        Ok(())
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        store_id: model.store_id,
        is_paid: model.is_paid,
        phone: model.phone,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn order_item_from_model(model: order_items::Model) -> OrderItem {
    OrderItem {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
    }
}
