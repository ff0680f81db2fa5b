use ecom_core::config::{AppEnv, ConfigError, parsed_or, required};

/// Admin service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AdminConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret shared with the auth service for verifying access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3113). Env var: `ADMIN_PORT`.
    pub admin_port: u16,
    pub app_env: AppEnv,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            admin_port: parsed_or("ADMIN_PORT", 3113)?,
            app_env: AppEnv::from_env(),
        })
    }
}
