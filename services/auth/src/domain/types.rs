use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account as stored by the auth service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub username: Option<String>,
    /// Argon2 PHC string. `None` for accounts without a password.
    pub hashed_password: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attempts to allocate a generated username before giving up.
pub const USERNAME_ATTEMPTS: usize = 5;
