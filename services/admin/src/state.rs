use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use ecom_auth_types::identity::JwtSecret;

use crate::infra::db::{
    DbBillboardRepository, DbCategoryRepository, DbColorRepository, DbOrderRepository,
    DbProductRepository, DbSizeRepository, DbStoreRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn store_repo(&self) -> DbStoreRepository {
        DbStoreRepository {
            db: self.db.clone(),
        }
    }

    pub fn billboard_repo(&self) -> DbBillboardRepository {
        DbBillboardRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn size_repo(&self) -> DbSizeRepository {
        DbSizeRepository {
            db: self.db.clone(),
        }
    }

    pub fn color_repo(&self) -> DbColorRepository {
        DbColorRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
