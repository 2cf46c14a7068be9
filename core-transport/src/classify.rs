//! Status-code classification.
//!
//! The single place a received HTTP status becomes a [`TransportError`].
//! Total over all status values: anything unrecognized, including 4xx codes
//! other than 401/403/404, falls into the `SERVER_ERROR` bucket with an
//! `HTTP <status>` message.

use crate::error::{TransportError, TransportErrorCode};

/// Classify a non-2xx HTTP status into a transport error.
pub fn classify_status(status: u16) -> TransportError {
    match status {
        401 => TransportError::from_status(
            TransportErrorCode::Unauthorized,
            status,
            "Authentication required",
        ),
        403 => TransportError::from_status(TransportErrorCode::Forbidden, status, "Access denied"),
        404 => {
            TransportError::from_status(TransportErrorCode::NotFound, status, "Resource not found")
        }
        s if s >= 500 => TransportError::from_status(
            TransportErrorCode::ServerError,
            status,
            format!("HTTP {}", s),
        ),
        // Remaining 4xx (400, 409, 422, ...) and stray codes share the
        // server bucket. Preserved from the backend contract.
        s => TransportError::from_status(
            TransportErrorCode::ServerError,
            status,
            format!("HTTP {}", s),
        ),
    }
}
