//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and a `Location` header carrying the stored URL.
/// The code is looked up as-is; malformed codes simply miss.
///
/// # Errors
///
/// - 404 Not Found when the code is unknown to the mapping store
/// - 503 Service Unavailable when the store cannot be reached
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener.resolve(&code).await?;

    debug!("Redirecting {} -> {}", code, record.long_url);

    // 302 per the observed contract; axum's Redirect helpers only emit
    // 303/307/308, so the response is assembled by hand.
    Ok((StatusCode::FOUND, [(header::LOCATION, record.long_url)]))
}
