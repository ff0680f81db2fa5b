use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use ecom_auth_schema::users;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

/// Map a unique-constraint violation on `users` to the matching domain error.
fn unique_violation(err: &DbErr) -> Option<AuthServiceError> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("username") => {
            Some(AuthServiceError::UsernameTaken)
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(AuthServiceError::EmailTaken),
        _ => None,
    }
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            image: Set(user.image.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => match unique_violation(&e) {
                Some(conflict) => Err(conflict),
                None => Err(anyhow::Error::new(e).context("create user").into()),
            },
        }
    }

    async fn set_username_if_absent(
        &self,
        id: Uuid,
        username: &str,
    ) -> Result<bool, AuthServiceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Username, Expr::value(username))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Id.eq(id))
            .filter(users::Column::Username.is_null())
            .exec(&self.db)
            .await;
        match result {
            Ok(res) => Ok(res.rows_affected > 0),
            Err(e) => match unique_violation(&e) {
                Some(_) => Err(AuthServiceError::UsernameTaken),
                None => Err(anyhow::Error::new(e).context("set username").into()),
            },
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        username: model.username,
        hashed_password: model.hashed_password,
        image: model.image,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
