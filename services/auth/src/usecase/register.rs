use chrono::Utc;
use uuid::Uuid;

use ecom_domain::account::{is_valid_email, is_valid_name, is_valid_username, password_problems};
use ecom_domain::validation::ValidationErrors;

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::usecase::username::EnsureUsernameUseCase;

pub struct RegisterInput {
    pub name: String,
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterInput {
    /// Trim surrounding whitespace and lowercase the email; passwords are kept verbatim.
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            username: self
                .username
                .map(|u| u.trim().to_owned())
                .filter(|u| !u.is_empty()),
            email: self.email.trim().to_lowercase(),
            password: self.password,
            confirm: self.confirm,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            is_valid_name(&self.name),
            "name",
            "name must be at least 3 characters",
        );
        if let Some(username) = &self.username {
            errors.check(
                is_valid_username(username),
                "username",
                "username must be 5-32 letters, digits, '-' or '_'",
            );
        }
        errors.check(is_valid_email(&self.email), "email", "email is invalid");
        for problem in password_problems(&self.password) {
            errors.push("password", problem);
        }
        errors.check(
            self.password == self.confirm,
            "confirm",
            "passwords do not match",
        );
        errors.into_result()
    }
}

pub struct RegisterUseCase<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: UserRepository + Clone, H: PasswordHasher> RegisterUseCase<R, H> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, AuthServiceError> {
        let input = input.normalized();
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AuthServiceError::EmailTaken);
        }
        if let Some(username) = &input.username {
            if self.repo.find_by_username(username).await?.is_some() {
                return Err(AuthServiceError::UsernameTaken);
            }
        }

        let now = Utc::now();
        let mut user = User {
            id: Uuid::now_v7(),
            name: Some(input.name),
            email: input.email,
            username: input.username,
            hashed_password: Some(self.hasher.hash(&input.password)?),
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;

        let ensure = EnsureUsernameUseCase {
            repo: self.repo.clone(),
        };
        user.username = Some(ensure.execute(user.id).await?);

        tracing::info!(user_id = %user.id, "registered user");
        Ok(user)
    }
}
