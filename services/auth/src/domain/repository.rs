#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::User;
use crate::error::AuthServiceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new account. Unique violations surface as `EmailTaken` / `UsernameTaken`.
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;

    /// Set `username` only while it is still NULL.
    ///
    /// Returns `false` when the user already had a username (nothing written).
    /// A collision with another account's username yields `UsernameTaken`.
    async fn set_username_if_absent(
        &self,
        id: Uuid,
        username: &str,
    ) -> Result<bool, AuthServiceError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthServiceError>;

    fn verify(&self, password: &str, hash: &str) -> bool;

    /// Spend the work of one `verify` when there is no stored hash to check.
    fn verify_absent(&self, password: &str) {
        let _ = self.hash(password);
    }
}
