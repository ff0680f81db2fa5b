use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};

use ecom_auth_types::cookie::{ACCESS_TOKEN_EXP, REFRESH_TOKEN_EXP};
use ecom_auth_types::token::{JwtClaims, TokenKind, validate_refresh_token};

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::User;
use crate::error::AuthServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn issue(
    user: &User,
    kind: TokenKind,
    ttl: u64,
    secret: &str,
) -> Result<(String, u64), AuthServiceError> {
    let exp = now_secs() + ttl;
    let claims = JwtClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        kind,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

pub fn issue_access_token(user: &User, secret: &str) -> Result<(String, u64), AuthServiceError> {
    issue(user, TokenKind::Access, ACCESS_TOKEN_EXP, secret)
}

pub fn issue_refresh_token(user: &User, secret: &str) -> Result<String, AuthServiceError> {
    issue(user, TokenKind::Refresh, REFRESH_TOKEN_EXP, secret).map(|(token, _)| token)
}

/// Access + refresh pair handed to the client.
#[derive(Debug)]
pub struct TokenPair {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

fn token_pair(user: User, secret: &str) -> Result<TokenPair, AuthServiceError> {
    let (access_token, access_token_exp) = issue_access_token(&user, secret)?;
    let refresh_token = issue_refresh_token(&user, secret)?;
    Ok(TokenPair {
        user,
        access_token,
        access_token_exp,
        refresh_token,
    })
}

// ── CreateToken (credential login) ───────────────────────────────────────────

pub struct CreateTokenInput {
    pub email: String,
    pub password: String,
}

pub struct CreateTokenUseCase<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<R: UserRepository, H: PasswordHasher> CreateTokenUseCase<R, H> {
    /// Unknown email, password-less account and wrong password all yield
    /// `InvalidCredentials`, and each pays for one password hash.
    pub async fn execute(&self, input: CreateTokenInput) -> Result<TokenPair, AuthServiceError> {
        let email = input.email.trim().to_lowercase();
        let user = self.repo.find_by_email(&email).await?;

        let verified = match user.as_ref().and_then(|u| u.hashed_password.as_deref()) {
            Some(hash) => self.hasher.verify(&input.password, hash),
            None => {
                self.hasher.verify_absent(&input.password);
                false
            }
        };

        match user {
            Some(user) if verified => token_pair(user, &self.jwt_secret),
            _ => Err(AuthServiceError::InvalidCredentials),
        }
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

pub struct RefreshTokenUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> RefreshTokenUseCase<R> {
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, AuthServiceError> {
        let info = validate_refresh_token(refresh_token, &self.jwt_secret)
            .map_err(|_| AuthServiceError::InvalidRefreshToken)?;

        let user = self
            .repo
            .find_by_id(info.user_id)
            .await?
            .ok_or(AuthServiceError::InvalidRefreshToken)?;

        token_pair(user, &self.jwt_secret)
    }
}
