use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use ecom_domain::catalog::{is_image_url, is_valid_price, to_price_scale};
use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{
    CategoryRepository, ColorRepository, ProductRepository, SizeRepository, StoreRepository,
};
use crate::domain::types::{Category, Color, Image, Product, ProductDetail, ProductFilter, Size};
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub is_archived: bool,
}

impl ProductInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            images: self.images.iter().map(|url| url.trim().to_owned()).collect(),
            ..self
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.check(
            is_valid_price(self.price),
            "price",
            "price must be greater than 0 with at most 2 decimals",
        );
        if self.images.is_empty() {
            errors.push("images", "at least one image is required");
        } else {
            errors.check(
                self.images.iter().all(|url| is_image_url(url)),
                "images",
                "every image url must point at an image file",
            );
        }
        errors.into_result()
    }
}

/// Category, size and color rows referenced by a product.
struct References {
    category: Category,
    size: Size,
    color: Color,
}

/// Resolve every reference within `store_id`, reporting each missing one.
async fn resolve_references<C, Z, K>(
    categories: &C,
    sizes: &Z,
    colors: &K,
    store_id: Uuid,
    input: &ProductInput,
) -> Result<References, AdminServiceError>
where
    C: CategoryRepository,
    Z: SizeRepository,
    K: ColorRepository,
{
    let category = categories.find(store_id, input.category_id).await?;
    let size = sizes.find(store_id, input.size_id).await?;
    let color = colors.find(store_id, input.color_id).await?;

    let mut errors = ValidationErrors::new();
    errors.check(category.is_some(), "categoryId", "category not found in this store");
    errors.check(size.is_some(), "sizeId", "size not found in this store");
    errors.check(color.is_some(), "colorId", "color not found in this store");
    match (category, size, color) {
        (Some(detail), Some(size), Some(color)) => Ok(References {
            category: detail.category,
            size,
            color,
        }),
        _ => Err(errors.into()),
    }
}

fn images_for(product_id: Uuid, urls: Vec<String>) -> Vec<Image> {
    let now = Utc::now();
    urls.into_iter()
        .map(|url| Image {
            id: Uuid::now_v7(),
            product_id,
            url,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(
        &self,
        store_id: Uuid,
        filter: ProductFilter,
    ) -> Result<Vec<ProductDetail>, AdminServiceError> {
        self.products.list(store_id, &filter).await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<ProductDetail, AdminServiceError> {
        self.products
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ProductNotFound)
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<S, P, C, Z, K>
where
    S: StoreRepository,
    P: ProductRepository,
    C: CategoryRepository,
    Z: SizeRepository,
    K: ColorRepository,
{
    pub stores: S,
    pub products: P,
    pub categories: C,
    pub sizes: Z,
    pub colors: K,
}

impl<S, P, C, Z, K> CreateProductUseCase<S, P, C, Z, K>
where
    S: StoreRepository,
    P: ProductRepository,
    C: CategoryRepository,
    Z: SizeRepository,
    K: ColorRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: ProductInput,
    ) -> Result<ProductDetail, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;
        let refs =
            resolve_references(&self.categories, &self.sizes, &self.colors, store_id, &input)
                .await?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::now_v7(),
            store_id,
            category_id: refs.category.id,
            size_id: refs.size.id,
            color_id: refs.color.id,
            name: input.name,
            price: to_price_scale(input.price),
            is_featured: input.is_featured,
            is_archived: input.is_archived,
            created_at: now,
            updated_at: now,
        };
        let images = images_for(product.id, input.images);
        self.products.create(&product, &images).await?;
        tracing::info!(%store_id, product_id = %product.id, "created product");
        Ok(ProductDetail {
            product,
            images,
            category: Some(refs.category),
            size: Some(refs.size),
            color: Some(refs.color),
        })
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<S, P, C, Z, K>
where
    S: StoreRepository,
    P: ProductRepository,
    C: CategoryRepository,
    Z: SizeRepository,
    K: ColorRepository,
{
    pub stores: S,
    pub products: P,
    pub categories: C,
    pub sizes: Z,
    pub colors: K,
}

impl<S, P, C, Z, K> UpdateProductUseCase<S, P, C, Z, K>
where
    S: StoreRepository,
    P: ProductRepository,
    C: CategoryRepository,
    Z: SizeRepository,
    K: ColorRepository,
{
    /// Replace every field and the whole image set.
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
        input: ProductInput,
    ) -> Result<ProductDetail, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let ProductDetail { mut product, .. } = self
            .products
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ProductNotFound)?;
        let refs =
            resolve_references(&self.categories, &self.sizes, &self.colors, store_id, &input)
                .await?;

        product.name = input.name;
        product.price = to_price_scale(input.price);
        product.category_id = refs.category.id;
        product.size_id = refs.size.id;
        product.color_id = refs.color.id;
        product.is_featured = input.is_featured;
        product.is_archived = input.is_archived;
        product.updated_at = Utc::now();
        let images = images_for(product.id, input.images);
        self.products.update(&product, &images).await?;
        Ok(ProductDetail {
            product,
            images,
            category: Some(refs.category),
            size: Some(refs.size),
            color: Some(refs.color),
        })
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<S: StoreRepository, P: ProductRepository> {
    pub stores: S,
    pub products: P,
}

impl<S: StoreRepository, P: ProductRepository> DeleteProductUseCase<S, P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<ProductDetail, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        let product = self
            .products
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ProductNotFound)?;
        self.products.delete(store_id, id).await?;
        tracing::info!(%store_id, product_id = %id, "deleted product");
        Ok(product)
    }
}
