use chrono::Utc;
use uuid::Uuid;

use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::StoreRepository;
use crate::domain::types::Store;
use crate::error::AdminServiceError;

/// Load `store_id` and require `user_id` to own it.
///
/// A store that does not exist is indistinguishable from one owned by
/// someone else: both are `Forbidden`.
pub async fn authorize_store<S: StoreRepository>(
    stores: &S,
    store_id: Uuid,
    user_id: Uuid,
) -> Result<Store, AdminServiceError> {
    match stores.find_by_id(store_id).await? {
        Some(store) if store.user_id == user_id => Ok(store),
        _ => Err(AdminServiceError::Forbidden),
    }
}

pub struct StoreInput {
    pub name: String,
}

impl StoreInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}

// ── ListStores ───────────────────────────────────────────────────────────────

pub struct ListStoresUseCase<S: StoreRepository> {
    pub stores: S,
}

impl<S: StoreRepository> ListStoresUseCase<S> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Store>, AdminServiceError> {
        self.stores.list_by_owner(user_id).await
    }
}

// ── GetStore ─────────────────────────────────────────────────────────────────

pub struct GetStoreUseCase<S: StoreRepository> {
    pub stores: S,
}

impl<S: StoreRepository> GetStoreUseCase<S> {
    pub async fn execute(&self, user_id: Uuid, store_id: Uuid) -> Result<Store, AdminServiceError> {
        authorize_store(&self.stores, store_id, user_id).await
    }
}

// ── CreateStore ──────────────────────────────────────────────────────────────

pub struct CreateStoreUseCase<S: StoreRepository> {
    pub stores: S,
}

impl<S: StoreRepository> CreateStoreUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: StoreInput,
    ) -> Result<Store, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;

        let now = Utc::now();
        let store = Store {
            id: Uuid::now_v7(),
            user_id,
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        self.stores.create(&store).await?;
        tracing::info!(store_id = %store.id, %user_id, "created store");
        Ok(store)
    }
}

// ── UpdateStore ──────────────────────────────────────────────────────────────

pub struct UpdateStoreUseCase<S: StoreRepository> {
    pub stores: S,
}

impl<S: StoreRepository> UpdateStoreUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        input: StoreInput,
    ) -> Result<Store, AdminServiceError> {
        let input = input.normalized();
        input.validate()?;

        let mut store = authorize_store(&self.stores, store_id, user_id).await?;
        store.name = input.name;
        store.updated_at = Utc::now();
        self.stores.update(&store).await?;
        Ok(store)
    }
}

// ── DeleteStore ──────────────────────────────────────────────────────────────

pub struct DeleteStoreUseCase<S: StoreRepository> {
    pub stores: S,
}

impl<S: StoreRepository> DeleteStoreUseCase<S> {
    pub async fn execute(&self, user_id: Uuid, store_id: Uuid) -> Result<Store, AdminServiceError> {
        let store = authorize_store(&self.stores, store_id, user_id).await?;
        self.stores.delete(store.id).await?;
        tracing::info!(%store_id, %user_id, "deleted store");
        Ok(store)
    }
}
