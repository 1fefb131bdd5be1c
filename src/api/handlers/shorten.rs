//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or re-creates) the short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// ```json
/// { "short": "ed1d4137", "url": "https://example.com/a/b" }
/// ```
///
/// Repeating the request for the same URL returns the same code; the code is
/// derived from the URL, not allocated.
///
/// # Errors
///
/// - 400 Bad Request when `url` is missing or empty
/// - 409 Conflict when the code is occupied by a different URL and the
///   collision policy rejects overwrites
/// - 503 Service Unavailable when the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.shortener.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short: record.code,
        url: record.long_url,
    }))
}
