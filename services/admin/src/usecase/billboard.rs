use chrono::Utc;
use uuid::Uuid;

use ecom_domain::catalog::is_image_url;
use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{BillboardRepository, StoreRepository};
use crate::domain::types::Billboard;
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

pub struct BillboardInput {
    pub label: String,
    pub image_url: String,
}

impl BillboardInput {
    fn normalized(self) -> Self {
        Self {
            label: self.label.trim().to_owned(),
            image_url: self.image_url.trim().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("label", &self.label);
        if self.image_url.is_empty() {
            errors.push("imageUrl", "imageUrl is required");
        } else {
            errors.check(
                is_image_url(&self.image_url),
                "imageUrl",
                "imageUrl must point at a jpg, jpeg, png, webp, avif or gif file",
            );
        }
        errors.into_result()
    }
}

// ── ListBillboards ───────────────────────────────────────────────────────────

pub struct ListBillboardsUseCase<B: BillboardRepository> {
    pub billboards: B,
}

impl<B: BillboardRepository> ListBillboardsUseCase<B> {
    pub async fn execute(&self, store_id: Uuid) -> Result<Vec<Billboard>, AdminServiceError> {
        self.billboards.list(store_id).await
    }
}

// ── GetBillboard ─────────────────────────────────────────────────────────────

pub struct GetBillboardUseCase<B: BillboardRepository> {
    pub billboards: B,
}

impl<B: BillboardRepository> GetBillboardUseCase<B> {
    pub async fn execute(&self, store_id: Uuid, id: Uuid) -> Result<Billboard, AdminServiceError> {
        self.billboards
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::BillboardNotFound)
    }
}

// ── CreateBillboard ──────────────────────────────────────────────────────────

pub struct CreateBillboardUseCase<S: StoreRepository, B: BillboardRepository> {
    pub stores: S,
    pub billboards: B,
}

impl<S: StoreRepository, B: BillboardRepository> CreateBillboardUseCase<S, B> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: BillboardInput,
    ) -> Result<Billboard, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let now = Utc::now();
        let billboard = Billboard {
            id: Uuid::now_v7(),
            store_id,
            label: input.label,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        };
        self.billboards.create(&billboard).await?;
        tracing::info!(%store_id, billboard_id = %billboard.id, "created billboard");
        Ok(billboard)
    }
}

// ── UpdateBillboard ──────────────────────────────────────────────────────────

pub struct UpdateBillboardUseCase<S: StoreRepository, B: BillboardRepository> {
    pub stores: S,
    pub billboards: B,
}

impl<S: StoreRepository, B: BillboardRepository> UpdateBillboardUseCase<S, B> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
        input: BillboardInput,
    ) -> Result<Billboard, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let mut billboard = self
            .billboards
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::BillboardNotFound)?;
        billboard.label = input.label;
        billboard.image_url = input.image_url;
        billboard.updated_at = Utc::now();
        self.billboards.update(&billboard).await?;
        Ok(billboard)
    }
}

// ── DeleteBillboard ──────────────────────────────────────────────────────────

pub struct DeleteBillboardUseCase<S: StoreRepository, B: BillboardRepository> {
    pub stores: S,
    pub billboards: B,
}

impl<S: StoreRepository, B: BillboardRepository> DeleteBillboardUseCase<S, B> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Billboard, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        let billboard = self
            .billboards
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::BillboardNotFound)?;
        self.billboards.delete(store_id, id).await?;
        tracing::info!(%store_id, billboard_id = %id, "deleted billboard");
        Ok(billboard)
    }
}
