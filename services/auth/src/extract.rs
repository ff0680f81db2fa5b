use axum::extract::FromRequest;

use crate::error::AuthServiceError;

/// `Json` whose rejection renders as an `AuthServiceError` body (422).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AuthServiceError))]
pub struct AppJson<T>(pub T);
