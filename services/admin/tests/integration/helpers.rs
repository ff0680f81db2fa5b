use std::sync::{Arc, Mutex};

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use ecom_admin::domain::repository::{
    BillboardRepository, CategoryRepository, ColorRepository, OrderRepository, ProductRepository,
    SizeRepository, StoreRepository,
};
use ecom_admin::domain::types::{
    Billboard, Category, CategoryDetail, Color, Image, Order, OrderDetail, OrderItem, Product,
    ProductDetail, ProductFilter, Size, Store,
};
use ecom_admin::error::AdminServiceError;

// ── MockDb ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct Tables {
    pub stores: Vec<Store>,
    pub billboards: Vec<Billboard>,
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub colors: Vec<Color>,
    pub products: Vec<Product>,
    pub images: Vec<Image>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

/// In-memory stand-in for every admin repository.
///
/// Deletes follow the schema: stores cascade, referenced catalog rows are `InUse`.
#[derive(Clone, Default)]
pub struct MockDb {
    pub tables: Arc<Mutex<Tables>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.lock().unwrap())
    }

    fn product_detail(tables: &Tables, product: &Product) -> ProductDetail {
        ProductDetail {
            product: product.clone(),
            images: tables
                .images
                .iter()
                .filter(|i| i.product_id == product.id)
                .cloned()
                .collect(),
            category: tables
                .categories
                .iter()
                .find(|c| c.id == product.category_id)
                .cloned(),
            size: tables.sizes.iter().find(|s| s.id == product.size_id).cloned(),
            color: tables.colors.iter().find(|c| c.id == product.color_id).cloned(),
        }
    }

    fn category_detail(tables: &Tables, category: &Category) -> CategoryDetail {
        CategoryDetail {
            category: category.clone(),
            billboard: tables
                .billboards
                .iter()
                .find(|b| b.id == category.billboard_id)
                .cloned(),
        }
    }
}

/// Newest first, as the database queries order them.
fn newest_first<T: Clone>(rows: impl Iterator<Item = T>, key: impl Fn(&T) -> Uuid) -> Vec<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by_key(|row| std::cmp::Reverse(key(row)));
    rows
}

impl StoreRepository for MockDb {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, AdminServiceError> {
        Ok(self.with(|t| t.stores.iter().find(|s| s.id == id).cloned()))
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Store>, AdminServiceError> {
        Ok(self.with(|t| {
            t.stores
                .iter()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, store: &Store) -> Result<(), AdminServiceError> {
        self.with(|t| t.stores.push(store.clone()));
        Ok(())
    }

    async fn update(&self, store: &Store) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.stores.iter_mut().find(|s| s.id == store.id) {
                *row = store.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            let products: Vec<Uuid> = t
                .products
                .iter()
                .filter(|p| p.store_id == id)
                .map(|p| p.id)
                .collect();
            let orders: Vec<Uuid> = t
                .orders
                .iter()
                .filter(|o| o.store_id == id)
                .map(|o| o.id)
                .collect();
            t.stores.retain(|s| s.id != id);
            t.billboards.retain(|b| b.store_id != id);
            t.categories.retain(|c| c.store_id != id);
            t.sizes.retain(|s| s.store_id != id);
            t.colors.retain(|c| c.store_id != id);
            t.products.retain(|p| p.store_id != id);
            t.images.retain(|i| !products.contains(&i.product_id));
            t.orders.retain(|o| o.store_id != id);
            t.order_items.retain(|i| !orders.contains(&i.order_id));
        });
        Ok(())
    }
}

impl BillboardRepository for MockDb {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Billboard>, AdminServiceError> {
        Ok(self.with(|t| {
            newest_first(
                t.billboards.iter().filter(|b| b.store_id == store_id).cloned(),
                |b| b.id,
            )
        }))
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Billboard>, AdminServiceError> {
        Ok(self.with(|t| {
            t.billboards
                .iter()
                .find(|b| b.id == id && b.store_id == store_id)
                .cloned()
        }))
    }

    async fn create(&self, billboard: &Billboard) -> Result<(), AdminServiceError> {
        self.with(|t| t.billboards.push(billboard.clone()));
        Ok(())
    }

    async fn update(&self, billboard: &Billboard) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.billboards.iter_mut().find(|b| b.id == billboard.id) {
                *row = billboard.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if t.categories.iter().any(|c| c.billboard_id == id) {
                return Err(AdminServiceError::InUse("billboard"));
            }
            t.billboards.retain(|b| !(b.id == id && b.store_id == store_id));
            Ok(())
        })
    }
}

impl CategoryRepository for MockDb {
    async fn list(&self, store_id: Uuid) -> Result<Vec<CategoryDetail>, AdminServiceError> {
        Ok(self.with(|t| {
            let rows = newest_first(
                t.categories.iter().filter(|c| c.store_id == store_id).cloned(),
                |c| c.id,
            );
            rows.iter().map(|c| Self::category_detail(t, c)).collect()
        }))
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CategoryDetail>, AdminServiceError> {
        Ok(self.with(|t| {
            t.categories
                .iter()
                .find(|c| c.id == id && c.store_id == store_id)
                .map(|c| Self::category_detail(t, c))
        }))
    }

    async fn create(&self, category: &Category) -> Result<(), AdminServiceError> {
        self.with(|t| t.categories.push(category.clone()));
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.categories.iter_mut().find(|c| c.id == category.id) {
                *row = category.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if t.products.iter().any(|p| p.category_id == id) {
                return Err(AdminServiceError::InUse("category"));
            }
            t.categories.retain(|c| !(c.id == id && c.store_id == store_id));
            Ok(())
        })
    }
}

impl SizeRepository for MockDb {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Size>, AdminServiceError> {
        Ok(self.with(|t| {
            newest_first(
                t.sizes.iter().filter(|s| s.store_id == store_id).cloned(),
                |s| s.id,
            )
        }))
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Size>, AdminServiceError> {
        Ok(self.with(|t| {
            t.sizes
                .iter()
                .find(|s| s.id == id && s.store_id == store_id)
                .cloned()
        }))
    }

    async fn create(&self, size: &Size) -> Result<(), AdminServiceError> {
        self.with(|t| t.sizes.push(size.clone()));
        Ok(())
    }

    async fn update(&self, size: &Size) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.sizes.iter_mut().find(|s| s.id == size.id) {
                *row = size.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if t.products.iter().any(|p| p.size_id == id) {
                return Err(AdminServiceError::InUse("size"));
            }
            t.sizes.retain(|s| !(s.id == id && s.store_id == store_id));
            Ok(())
        })
    }
}

impl ColorRepository for MockDb {
    async fn list(&self, store_id: Uuid) -> Result<Vec<Color>, AdminServiceError> {
        Ok(self.with(|t| {
            newest_first(
                t.colors.iter().filter(|c| c.store_id == store_id).cloned(),
                |c| c.id,
            )
        }))
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Color>, AdminServiceError> {
        Ok(self.with(|t| {
            t.colors
                .iter()
                .find(|c| c.id == id && c.store_id == store_id)
                .cloned()
        }))
    }

    async fn create(&self, color: &Color) -> Result<(), AdminServiceError> {
        self.with(|t| t.colors.push(color.clone()));
        Ok(())
    }

    async fn update(&self, color: &Color) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.colors.iter_mut().find(|c| c.id == color.id) {
                *row = color.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if t.products.iter().any(|p| p.color_id == id) {
                return Err(AdminServiceError::InUse("color"));
            }
            t.colors.retain(|c| !(c.id == id && c.store_id == store_id));
            Ok(())
        })
    }
}

/// In-memory rendition of the product list query.
fn product_matches(filter: &ProductFilter, product: &Product) -> bool {
    !product.is_archived
        && filter.category_id.is_none_or(|id| product.category_id == id)
        && filter.size_id.is_none_or(|id| product.size_id == id)
        && filter.color_id.is_none_or(|id| product.color_id == id)
        && (!filter.featured_only || product.is_featured)
}

impl ProductRepository for MockDb {
    async fn list(
        &self,
        store_id: Uuid,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductDetail>, AdminServiceError> {
        Ok(self.with(|t| {
            let rows = newest_first(
                t.products
                    .iter()
                    .filter(|p| p.store_id == store_id && product_matches(filter, p))
                    .cloned(),
                |p| p.id,
            );
            rows.iter().map(|p| Self::product_detail(t, p)).collect()
        }))
    }

    async fn find(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ProductDetail>, AdminServiceError> {
        Ok(self.with(|t| {
            t.products
                .iter()
                .find(|p| p.id == id && p.store_id == store_id)
                .map(|p| Self::product_detail(t, p))
        }))
    }

    async fn find_many(
        &self,
        store_id: Uuid,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, AdminServiceError> {
        Ok(self.with(|t| {
            t.products
                .iter()
                .filter(|p| p.store_id == store_id && ids.contains(&p.id))
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError> {
        self.with(|t| {
            t.products.push(product.clone());
            t.images.extend_from_slice(images);
        });
        Ok(())
    }

    async fn update(&self, product: &Product, images: &[Image]) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if let Some(row) = t.products.iter_mut().find(|p| p.id == product.id) {
                *row = product.clone();
            }
            t.images.retain(|i| i.product_id != product.id);
            t.images.extend_from_slice(images);
        });
        Ok(())
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<(), AdminServiceError> {
        self.with(|t| {
            if t.order_items.iter().any(|i| i.product_id == id) {
                return Err(AdminServiceError::InUse("product"));
            }
            t.products.retain(|p| !(p.id == id && p.store_id == store_id));
            t.images.retain(|i| i.product_id != id);
            Ok(())
        })
    }
}

impl OrderRepository for MockDb {
    async fn list(&self, store_id: Uuid) -> Result<Vec<OrderDetail>, AdminServiceError> {
        Ok(self.with(|t| {
            let orders = newest_first(
                t.orders.iter().filter(|o| o.store_id == store_id).cloned(),
                |o| o.id,
            );
            orders
                .into_iter()
                .map(|order| {
                    let lines = t
                        .order_items
                        .iter()
                        .filter(|i| i.order_id == order.id)
                        .filter_map(|i| {
                            let product = t.products.iter().find(|p| p.id == i.product_id)?;
                            Some((i.clone(), product.clone()))
                        })
                        .collect();
                    OrderDetail { order, lines }
                })
                .collect()
        }))
    }

    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<(), AdminServiceError> {
        self.with(|t| {
            t.orders.push(order.clone());
            t.order_items.extend_from_slice(items);
        });
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const IMAGE_URL: &str = "https://cdn.shop.example/banner.png";

pub fn owner_id() -> Uuid {
    Uuid::from_u128(0x0196_0000_0000_7000_8000_0000_0000_0001)
}

pub fn stranger_id() -> Uuid {
    Uuid::from_u128(0x0196_0000_0000_7000_8000_0000_0000_0002)
}

pub fn seed_store(db: &MockDb, user_id: Uuid, name: &str) -> Store {
    let now = Utc::now();
    let store = Store {
        id: Uuid::now_v7(),
        user_id,
        name: name.into(),
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.stores.push(store.clone()));
    store
}

pub fn seed_billboard(db: &MockDb, store_id: Uuid) -> Billboard {
    let now = Utc::now();
    let billboard = Billboard {
        id: Uuid::now_v7(),
        store_id,
        label: "Summer sale".into(),
        image_url: IMAGE_URL.into(),
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.billboards.push(billboard.clone()));
    billboard
}

pub fn seed_category(db: &MockDb, store_id: Uuid, billboard_id: Uuid) -> Category {
    let now = Utc::now();
    let category = Category {
        id: Uuid::now_v7(),
        store_id,
        billboard_id,
        name: "Shirts".into(),
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.categories.push(category.clone()));
    category
}

pub fn seed_size(db: &MockDb, store_id: Uuid) -> Size {
    let now = Utc::now();
    let size = Size {
        id: Uuid::now_v7(),
        store_id,
        name: "Medium".into(),
        value: "M".into(),
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.sizes.push(size.clone()));
    size
}

pub fn seed_color(db: &MockDb, store_id: Uuid) -> Color {
    let now = Utc::now();
    let color = Color {
        id: Uuid::now_v7(),
        store_id,
        name: "Navy".into(),
        value: "#001f3f".into(),
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.colors.push(color.clone()));
    color
}

/// Category, size and color in one store, ready to hang products on.
pub struct Catalog {
    pub store: Store,
    pub category: Category,
    pub size: Size,
    pub color: Color,
}

pub fn seed_catalog(db: &MockDb, user_id: Uuid) -> Catalog {
    let store = seed_store(db, user_id, "Corner Shop");
    let billboard = seed_billboard(db, store.id);
    let category = seed_category(db, store.id, billboard.id);
    let size = seed_size(db, store.id);
    let color = seed_color(db, store.id);
    Catalog {
        store,
        category,
        size,
        color,
    }
}

pub fn seed_product(db: &MockDb, catalog: &Catalog, name: &str, price: Decimal) -> Product {
    let now = Utc::now();
    let product = Product {
        id: Uuid::now_v7(),
        store_id: catalog.store.id,
        category_id: catalog.category.id,
        size_id: catalog.size.id,
        color_id: catalog.color.id,
        name: name.into(),
        price,
        is_featured: false,
        is_archived: false,
        created_at: now,
        updated_at: now,
    };
    db.with(|t| t.products.push(product.clone()));
    product
}
