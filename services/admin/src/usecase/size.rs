use chrono::Utc;
use uuid::Uuid;

use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{SizeRepository, StoreRepository};
use crate::domain::types::Size;
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

pub struct SizeInput {
    pub name: String,
    pub value: String,
}

impl SizeInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            value: self.value.trim().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require("value", &self.value);
        errors.into_result()
    }
}

// ── ListSizes ────────────────────────────────────────────────────────────────

pub struct ListSizesUseCase<Z: SizeRepository> {
    pub sizes: Z,
}

impl<Z: SizeRepository> ListSizesUseCase<Z> {
    pub async fn execute(&self, store_id: Uuid) -> Result<Vec<Size>, AdminServiceError> {
        self.sizes.list(store_id).await
    }
}

// ── GetSize ──────────────────────────────────────────────────────────────────

pub struct GetSizeUseCase<Z: SizeRepository> {
    pub sizes: Z,
}

impl<Z: SizeRepository> GetSizeUseCase<Z> {
    pub async fn execute(&self, store_id: Uuid, id: Uuid) -> Result<Size, AdminServiceError> {
        self.sizes
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::SizeNotFound)
    }
}

// ── CreateSize ───────────────────────────────────────────────────────────────

pub struct CreateSizeUseCase<S: StoreRepository, Z: SizeRepository> {
    pub stores: S,
    pub sizes: Z,
}

impl<S: StoreRepository, Z: SizeRepository> CreateSizeUseCase<S, Z> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: SizeInput,
    ) -> Result<Size, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let now = Utc::now();
        let size = Size {
            id: Uuid::now_v7(),
            store_id,
            name: input.name,
            value: input.value,
            created_at: now,
            updated_at: now,
        };
        self.sizes.create(&size).await?;
        tracing::info!(%store_id, size_id = %size.id, "created size");
        Ok(size)
    }
}

// ── UpdateSize ───────────────────────────────────────────────────────────────

pub struct UpdateSizeUseCase<S: StoreRepository, Z: SizeRepository> {
    pub stores: S,
    pub sizes: Z,
}

impl<S: StoreRepository, Z: SizeRepository> UpdateSizeUseCase<S, Z> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
        input: SizeInput,
    ) -> Result<Size, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let mut size = self
            .sizes
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::SizeNotFound)?;
        size.name = input.name;
        size.value = input.value;
        size.updated_at = Utc::now();
        self.sizes.update(&size).await?;
        Ok(size)
    }
}

// ── DeleteSize ───────────────────────────────────────────────────────────────

pub struct DeleteSizeUseCase<S: StoreRepository, Z: SizeRepository> {
    pub stores: S,
    pub sizes: Z,
}

impl<S: StoreRepository, Z: SizeRepository> DeleteSizeUseCase<S, Z> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Size, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        let size = self
            .sizes
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::SizeNotFound)?;
        self.sizes.delete(store_id, id).await?;
        tracing::info!(%store_id, size_id = %id, "deleted size");
        Ok(size)
    }
}
