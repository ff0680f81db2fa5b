use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use ecom_auth_types::cookie::{
    REFRESH_TOKEN_COOKIE, clear_cookies, set_access_token_cookie, set_refresh_token_cookie,
};

use crate::error::AuthServiceError;
use crate::extract::AppJson;
use crate::handlers::session::UserResponse;
use crate::state::AppState;
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase, RefreshTokenUseCase, TokenPair};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub access_token_exp: u64,
}

fn respond(state: &AppState, jar: CookieJar, pair: TokenPair) -> Response {
    let jar = set_access_token_cookie(jar, pair.access_token.clone(), state.cookie_domain.clone());
    let jar = set_refresh_token_cookie(jar, pair.refresh_token, state.cookie_domain.clone());
    let body = TokenResponse {
        user: pair.user.into(),
        access_token: pair.access_token,
        access_token_exp: pair.access_token_exp,
    };
    (StatusCode::CREATED, jar, Json(body)).into_response()
}

// ── POST /api/auth/token ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTokenRequest {
    pub email: String,
    pub password: String,
}

pub async fn create_token(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(body): AppJson<CreateTokenRequest>,
) -> Result<Response, AuthServiceError> {
    let usecase = CreateTokenUseCase {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
        jwt_secret: state.secret(),
    };
    let pair = usecase
        .execute(CreateTokenInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(respond(&state, jar, pair))
}

// ── PATCH /api/auth/token ────────────────────────────────────────────────────

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AuthServiceError> {
    let refresh_value = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(AuthServiceError::InvalidRefreshToken)?;

    let usecase = RefreshTokenUseCase {
        repo: state.user_repo(),
        jwt_secret: state.secret(),
    };
    let pair = usecase.execute(&refresh_value).await?;
    Ok(respond(&state, jar, pair))
}

// ── DELETE /api/auth/token ───────────────────────────────────────────────────

pub async fn revoke_token(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        clear_cookies(jar, state.cookie_domain.clone()),
    )
}
