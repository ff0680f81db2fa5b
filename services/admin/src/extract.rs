//! Extractor wrappers whose rejections render as `AdminServiceError` bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AdminServiceError;

/// JSON body; malformed or mistyped payloads are 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AdminServiceError))]
pub struct AppJson<T>(pub T);

/// Path parameters; non-uuid ids are 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AdminServiceError))]
pub struct AppPath<T>(pub T);

/// Query string; unparseable filters are 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AdminServiceError))]
pub struct AppQuery<T>(pub T);
