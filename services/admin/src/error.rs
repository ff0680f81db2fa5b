use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ecom_core::error::error_response;
use ecom_domain::validation::ValidationErrors;

/// Admin service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("invalid payload")]
    Validation(ValidationErrors),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
    #[error("invalid store id")]
    InvalidStore,
    #[error("forbidden")]
    Forbidden,
    #[error("billboard not found")]
    BillboardNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("size not found")]
    SizeNotFound,
    #[error("color not found")]
    ColorNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("{0} is still in use")]
    InUse(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AdminServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidStore => "INVALID_STORE",
            Self::Forbidden => "FORBIDDEN",
            Self::BillboardNotFound => "BILLBOARD_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::SizeNotFound => "SIZE_NOT_FOUND",
            Self::ColorNotFound => "COLOR_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::InUse(_) => "IN_USE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<ValidationErrors> for AdminServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for AdminServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for AdminServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for AdminServiceError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for AdminServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPath(_) | Self::InvalidQuery(_) | Self::InvalidStore => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BillboardNotFound
            | Self::CategoryNotFound
            | Self::SizeNotFound
            | Self::ColorNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::InUse(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records every response; only 500s carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let kind = self.kind();
        let message = self.to_string();
        match self {
            Self::Validation(errors) => error_response(status, kind, message, Some(errors)),
            _ => error_response::<()>(status, kind, message, None),
        }
    }
}
