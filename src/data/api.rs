use gloo_net::http::Request;
use thiserror::Error;

use crate::config::{BOOK_ENDPOINT, TIMES_ENDPOINT};
use crate::data::booking::{BookingRequest, BookingResult, TimeSlot};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Fetches the full slot snapshot from the backend.
pub async fn fetch_times() -> Result<Vec<TimeSlot>, ApiError> {
    let response = Request::get(TIMES_ENDPOINT)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Posts one booking request. A non-2xx response is an error; whether the
/// booking itself was accepted is reported in the body.
pub async fn submit_booking(request: &BookingRequest) -> Result<BookingResult, ApiError> {
    let response = Request::post(BOOK_ENDPOINT)
        .json(request)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
