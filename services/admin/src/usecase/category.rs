use chrono::Utc;
use uuid::Uuid;

use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{BillboardRepository, CategoryRepository, StoreRepository};
use crate::domain::types::{Billboard, Category, CategoryDetail};
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

pub struct CategoryInput {
    pub name: String,
    pub billboard_id: Uuid,
}

impl CategoryInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            billboard_id: self.billboard_id,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}

/// The billboard a category points at must live in the same store.
async fn referenced_billboard<B: BillboardRepository>(
    billboards: &B,
    store_id: Uuid,
    billboard_id: Uuid,
) -> Result<Billboard, AdminServiceError> {
    match billboards.find(store_id, billboard_id).await? {
        Some(billboard) => Ok(billboard),
        None => {
            let mut errors = ValidationErrors::new();
            errors.push("billboardId", "billboard not found in this store");
            Err(errors.into())
        }
    }
}

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub async fn execute(&self, store_id: Uuid) -> Result<Vec<CategoryDetail>, AdminServiceError> {
        self.categories.list(store_id).await
    }
}

// ── GetCategory ──────────────────────────────────────────────────────────────

pub struct GetCategoryUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> GetCategoryUseCase<C> {
    pub async fn execute(
        &self,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<CategoryDetail, AdminServiceError> {
        self.categories
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::CategoryNotFound)
    }
}

// ── CreateCategory ───────────────────────────────────────────────────────────

pub struct CreateCategoryUseCase<S, C, B>
where
    S: StoreRepository,
    C: CategoryRepository,
    B: BillboardRepository,
{
    pub stores: S,
    pub categories: C,
    pub billboards: B,
}

impl<S, C, B> CreateCategoryUseCase<S, C, B>
where
    S: StoreRepository,
    C: CategoryRepository,
    B: BillboardRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: CategoryInput,
    ) -> Result<CategoryDetail, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;
        let billboard = referenced_billboard(&self.billboards, store_id, input.billboard_id).await?;

        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            store_id,
            billboard_id: billboard.id,
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        self.categories.create(&category).await?;
        tracing::info!(%store_id, category_id = %category.id, "created category");
        Ok(CategoryDetail {
            category,
            billboard: Some(billboard),
        })
    }
}

// ── UpdateCategory ───────────────────────────────────────────────────────────

pub struct UpdateCategoryUseCase<S, C, B>
where
    S: StoreRepository,
    C: CategoryRepository,
    B: BillboardRepository,
{
    pub stores: S,
    pub categories: C,
    pub billboards: B,
}

impl<S, C, B> UpdateCategoryUseCase<S, C, B>
where
    S: StoreRepository,
    C: CategoryRepository,
    B: BillboardRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
        input: CategoryInput,
    ) -> Result<CategoryDetail, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let CategoryDetail { mut category, .. } = self
            .categories
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::CategoryNotFound)?;
        let billboard = referenced_billboard(&self.billboards, store_id, input.billboard_id).await?;

        category.name = input.name;
        category.billboard_id = billboard.id;
        category.updated_at = Utc::now();
        self.categories.update(&category).await?;
        Ok(CategoryDetail {
            category,
            billboard: Some(billboard),
        })
    }
}

// ── DeleteCategory ───────────────────────────────────────────────────────────

pub struct DeleteCategoryUseCase<S: StoreRepository, C: CategoryRepository> {
    pub stores: S,
    pub categories: C,
}

impl<S: StoreRepository, C: CategoryRepository> DeleteCategoryUseCase<S, C> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<CategoryDetail, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        let category = self
            .categories
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::CategoryNotFound)?;
        self.categories.delete(store_id, id).await?;
        tracing::info!(%store_id, category_id = %id, "deleted category");
        Ok(category)
    }
}
