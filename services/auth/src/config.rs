use ecom_core::config::{AppEnv, ConfigError, parsed_or, required};

/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute (e.g. "shop.example").
    pub cookie_domain: String,
    /// TCP port to listen on (default 3112). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    pub app_env: AppEnv,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            cookie_domain: required("COOKIE_DOMAIN")?,
            auth_port: parsed_or("AUTH_PORT", 3112)?,
            app_env: AppEnv::from_env(),
        })
    }
}
