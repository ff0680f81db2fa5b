use anyhow::anyhow;
use rand::RngExt;
use uuid::Uuid;

use ecom_domain::account::{GENERATED_USERNAME_LEN, USERNAME_ALPHABET};

use crate::domain::repository::UserRepository;
use crate::domain::types::USERNAME_ATTEMPTS;
use crate::error::AuthServiceError;

pub fn generate_username() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_USERNAME_LEN)
        .map(|_| USERNAME_ALPHABET[rng.random_range(0..USERNAME_ALPHABET.len())] as char)
        .collect()
}

/// Guarantee that a user has a username, generating one when missing.
///
/// Idempotent: an existing username is returned untouched, and the write only
/// applies while the column is still NULL, so concurrent callers converge on
/// whichever value landed first.
pub struct EnsureUsernameUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> EnsureUsernameUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<String, AuthServiceError> {
        for _ in 0..USERNAME_ATTEMPTS {
            let user = self
                .repo
                .find_by_id(user_id)
                .await?
                .ok_or(AuthServiceError::UserNotFound)?;
            if let Some(username) = user.username {
                return Ok(username);
            }

            let candidate = generate_username();
            match self.repo.set_username_if_absent(user_id, &candidate).await {
                Ok(true) => {
                    tracing::info!(%user_id, "assigned generated username");
                    return Ok(candidate);
                }
                // Someone else filled it in between our read and write; re-read.
                Ok(false) => continue,
                Err(AuthServiceError::UsernameTaken) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(anyhow!("no free username after {USERNAME_ATTEMPTS} attempts").into())
    }
}
