//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Only presence is checked; the string is hashed
    /// and stored exactly as submitted.
    #[serde(default)]
    #[validate(length(min = 1, message = "url required"))]
    pub url: String,
}

/// Response carrying the derived short code and the original URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short: String,
    pub url: String,
}
