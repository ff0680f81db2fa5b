use chrono::Utc;
use uuid::Uuid;

use ecom_domain::catalog::is_hex_color;
use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{ColorRepository, StoreRepository};
use crate::domain::types::Color;
use crate::error::AdminServiceError;
use crate::usecase::store::authorize_store;

pub struct ColorInput {
    pub name: String,
    pub value: String,
}

impl ColorInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            value: self.value.trim().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.check(
            is_hex_color(&self.value),
            "value",
            "value must be a hex color such as #fff or #1a2b3c",
        );
        errors.into_result()
    }
}

// ── ListColors ───────────────────────────────────────────────────────────────

pub struct ListColorsUseCase<K: ColorRepository> {
    pub colors: K,
}

impl<K: ColorRepository> ListColorsUseCase<K> {
    pub async fn execute(&self, store_id: Uuid) -> Result<Vec<Color>, AdminServiceError> {
        self.colors.list(store_id).await
    }
}

// ── GetColor ─────────────────────────────────────────────────────────────────

pub struct GetColorUseCase<K: ColorRepository> {
    pub colors: K,
}

impl<K: ColorRepository> GetColorUseCase<K> {
    pub async fn execute(&self, store_id: Uuid, id: Uuid) -> Result<Color, AdminServiceError> {
        self.colors
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ColorNotFound)
    }
}

// ── CreateColor ──────────────────────────────────────────────────────────────

pub struct CreateColorUseCase<S: StoreRepository, K: ColorRepository> {
    pub stores: S,
    pub colors: K,
}

impl<S: StoreRepository, K: ColorRepository> CreateColorUseCase<S, K> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: ColorInput,
    ) -> Result<Color, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let now = Utc::now();
        let color = Color {
            id: Uuid::now_v7(),
            store_id,
            name: input.name,
            value: input.value,
            created_at: now,
            updated_at: now,
        };
        self.colors.create(&color).await?;
        tracing::info!(%store_id, color_id = %color.id, "created color");
        Ok(color)
    }
}

// ── UpdateColor ──────────────────────────────────────────────────────────────

pub struct UpdateColorUseCase<S: StoreRepository, K: ColorRepository> {
    pub stores: S,
    pub colors: K,
}

impl<S: StoreRepository, K: ColorRepository> UpdateColorUseCase<S, K> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
        input: ColorInput,
    ) -> Result<Color, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;
        authorize_store(&self.stores, store_id, user_id).await?;

        let mut color = self
            .colors
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ColorNotFound)?;
        color.name = input.name;
        color.value = input.value;
        color.updated_at = Utc::now();
        self.colors.update(&color).await?;
        Ok(color)
    }
}

// ── DeleteColor ──────────────────────────────────────────────────────────────

pub struct DeleteColorUseCase<S: StoreRepository, K: ColorRepository> {
    pub stores: S,
    pub colors: K,
}

impl<S: StoreRepository, K: ColorRepository> DeleteColorUseCase<S, K> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        id: Uuid,
    ) -> Result<Color, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await?;
        let color = self
            .colors
            .find(store_id, id)
            .await?
            .ok_or(AdminServiceError::ColorNotFound)?;
        self.colors.delete(store_id, id).await?;
        tracing::info!(%store_id, color_id = %id, "deleted color");
        Ok(color)
    }
}
