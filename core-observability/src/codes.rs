//! Domain-level error codes.
//!
//! Distinct from (and derived from) the transport codes: these describe
//! what a failure means to the product, and are what the UI policy and the
//! sink key on.

use core_transport::TransportErrorCode;
use serde::{Deserialize, Serialize};

/// Stable observability error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NetworkError,
    Timeout,
    ServerError,
    InvalidJson,
    Unauthorized,
    Forbidden,
    NotFound,
    /// User is not eligible to take the task
    EligibilityFailed,
    /// Task requires a higher trust tier than the user holds
    TrustTierRequired,
    /// Task expired before the user acted on it
    TaskExpired,
    /// Another runner claimed the task first
    TaskTaken,
    /// Backend is in maintenance mode
    Maintenance,
    /// Response arrived but did not match the expected shape
    InvalidResponse,
    /// A required field was absent from an otherwise valid response
    MissingRequiredField,
}

impl ErrorCode {
    /// Stable wire name, as emitted into log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::ServerError => "SERVER_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::EligibilityFailed => "ELIGIBILITY_FAILED",
            Self::TrustTierRequired => "TRUST_TIER_REQUIRED",
            Self::TaskExpired => "TASK_EXPIRED",
            Self::TaskTaken => "TASK_TAKEN",
            Self::Maintenance => "MAINTENANCE",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
        }
    }

    /// Parse a wire name back into a code. Unknown names yield `None`;
    /// policy lookups fall back to the conservative default for those.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "NETWORK_ERROR" => Some(Self::NetworkError),
            "TIMEOUT" => Some(Self::Timeout),
            "SERVER_ERROR" => Some(Self::ServerError),
            "INVALID_JSON" => Some(Self::InvalidJson),
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            "FORBIDDEN" => Some(Self::Forbidden),
            "NOT_FOUND" => Some(Self::NotFound),
            "ELIGIBILITY_FAILED" => Some(Self::EligibilityFailed),
            "TRUST_TIER_REQUIRED" => Some(Self::TrustTierRequired),
            "TASK_EXPIRED" => Some(Self::TaskExpired),
            "TASK_TAKEN" => Some(Self::TaskTaken),
            "MAINTENANCE" => Some(Self::Maintenance),
            "INVALID_RESPONSE" => Some(Self::InvalidResponse),
            "MISSING_REQUIRED_FIELD" => Some(Self::MissingRequiredField),
            _ => None,
        }
    }
}

impl From<TransportErrorCode> for ErrorCode {
    /// Fixed total mapping; timeouts collapse into `NetworkError`.
    fn from(code: TransportErrorCode) -> Self {
        match code {
            TransportErrorCode::NetworkError | TransportErrorCode::Timeout => Self::NetworkError,
            TransportErrorCode::ServerError => Self::ServerError,
            TransportErrorCode::InvalidJson => Self::InvalidJson,
            TransportErrorCode::Unauthorized => Self::Unauthorized,
            TransportErrorCode::Forbidden => Self::Forbidden,
            TransportErrorCode::NotFound => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRANSPORT_CODES: [TransportErrorCode; 7] = [
        TransportErrorCode::NetworkError,
        TransportErrorCode::Timeout,
        TransportErrorCode::ServerError,
        TransportErrorCode::InvalidJson,
        TransportErrorCode::Unauthorized,
        TransportErrorCode::Forbidden,
        TransportErrorCode::NotFound,
    ];

    #[test]
    fn test_every_transport_code_maps() {
        for code in ALL_TRANSPORT_CODES {
            // Totality: the conversion is defined for every transport code.
            let _mapped: ErrorCode = code.into();
        }
    }

    #[test]
    fn test_timeout_collapses_into_network_error() {
        assert_eq!(
            ErrorCode::from(TransportErrorCode::Timeout),
            ErrorCode::NetworkError
        );
        assert_eq!(
            ErrorCode::from(TransportErrorCode::NetworkError),
            ErrorCode::NetworkError
        );
    }

    #[test]
    fn test_status_codes_map_identically() {
        assert_eq!(
            ErrorCode::from(TransportErrorCode::Unauthorized),
            ErrorCode::Unauthorized
        );
        assert_eq!(
            ErrorCode::from(TransportErrorCode::NotFound),
            ErrorCode::NotFound
        );
        assert_eq!(
            ErrorCode::from(TransportErrorCode::InvalidJson),
            ErrorCode::InvalidJson
        );
    }

    #[test]
    fn test_wire_name_round_trip() {
        for code in [
            ErrorCode::NetworkError,
            ErrorCode::EligibilityFailed,
            ErrorCode::TrustTierRequired,
            ErrorCode::TaskExpired,
            ErrorCode::TaskTaken,
            ErrorCode::Maintenance,
            ErrorCode::InvalidResponse,
            ErrorCode::MissingRequiredField,
        ] {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::parse("SOMETHING_NEW"), None);
    }

    #[test]
    fn test_serde_matches_wire_names() {
        let json = serde_json::to_string(&ErrorCode::TrustTierRequired).unwrap();
        assert_eq!(json, "\"TRUST_TIER_REQUIRED\"");
    }
}
