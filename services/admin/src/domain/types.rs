use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Tenant boundary. Every catalog row and order belongs to exactly one store.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: Uuid,
    /// Owner account id, issued by the auth service.
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Billboard {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category joined with the billboard it points at.
#[derive(Debug, Clone)]
pub struct CategoryDetail {
    pub category: Category,
    pub billboard: Option<Billboard>,
}

#[derive(Debug, Clone)]
pub struct Size {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    /// Free-form dimension such as "XL" or "42".
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Color {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    /// Hex string, e.g. `#1a2b3c`.
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Image {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product with its images and the category, size and color rows it references.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub images: Vec<Image>,
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub color: Option<Color>,
}

/// Public product listing filters. Archived products are never listed.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub featured_only: bool,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub store_id: Uuid,
    pub is_paid: bool,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
}

/// Order with each item's product. Items whose product row is gone are dropped.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<(OrderItem, Product)>,
}

impl OrderDetail {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|(_, product)| product.price).sum()
    }

    /// Product names joined with ", " in item order.
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|(_, product)| product.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
