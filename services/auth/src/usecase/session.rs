use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AuthServiceError;

/// Resolve the current session user from the access-token subject.
pub struct GetSessionUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetSessionUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AuthServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}
