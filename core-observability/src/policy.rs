//! Error-to-UI policy.
//!
//! [`error_config`] is the single source of truth for how every error
//! condition is surfaced: tone drives visual severity, `recoverable`
//! decides whether a retry affordance renders, and the action tells the
//! screen what a tap should do. Screens and logging derive from this table
//! instead of hardcoding treatments.

use crate::codes::ErrorCode;

/// Visual severity of an error surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Danger,
    Success,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

/// Suggested recovery action for an error condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Re-invoke the failed load (user-initiated; nothing retries itself)
    Retry,
    /// Leave the screen
    Back,
    /// Route to a named recovery destination
    Navigate { destination: String },
    /// Nothing the user can do (e.g. maintenance)
    None,
}

impl RecoveryAction {
    pub fn navigate(destination: impl Into<String>) -> Self {
        Self::Navigate {
            destination: destination.into(),
        }
    }

    /// Stable label used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Back => "back",
            Self::Navigate { .. } => "navigate",
            Self::None => "none",
        }
    }
}

/// UI treatment of one error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorUiConfig {
    pub tone: Tone,
    pub recoverable: bool,
    pub action: RecoveryAction,
}

impl ErrorUiConfig {
    /// Most conservative treatment; what unknown codes degrade to.
    pub fn fallback() -> Self {
        Self {
            tone: Tone::Danger,
            recoverable: false,
            action: RecoveryAction::None,
        }
    }
}

/// Map an error code to its UI treatment. Pure and total.
pub fn error_config(code: ErrorCode) -> ErrorUiConfig {
    match code {
        ErrorCode::NetworkError | ErrorCode::Timeout => ErrorUiConfig {
            tone: Tone::Warning,
            recoverable: true,
            action: RecoveryAction::Retry,
        },
        ErrorCode::ServerError => ErrorUiConfig {
            tone: Tone::Danger,
            recoverable: true,
            action: RecoveryAction::Retry,
        },
        ErrorCode::InvalidJson | ErrorCode::InvalidResponse => ErrorUiConfig {
            tone: Tone::Danger,
            recoverable: true,
            action: RecoveryAction::Retry,
        },
        ErrorCode::Unauthorized => ErrorUiConfig {
            tone: Tone::Warning,
            recoverable: true,
            action: RecoveryAction::navigate("sign-in"),
        },
        ErrorCode::Forbidden => ErrorUiConfig {
            tone: Tone::Danger,
            recoverable: false,
            action: RecoveryAction::Back,
        },
        ErrorCode::NotFound => ErrorUiConfig {
            tone: Tone::Warning,
            recoverable: false,
            action: RecoveryAction::Back,
        },
        ErrorCode::EligibilityFailed => ErrorUiConfig {
            tone: Tone::Info,
            recoverable: false,
            action: RecoveryAction::Back,
        },
        ErrorCode::TrustTierRequired => ErrorUiConfig {
            tone: Tone::Info,
            recoverable: false,
            action: RecoveryAction::navigate("trust-tier"),
        },
        ErrorCode::TaskExpired => ErrorUiConfig {
            tone: Tone::Warning,
            recoverable: false,
            action: RecoveryAction::Back,
        },
        ErrorCode::TaskTaken => ErrorUiConfig {
            tone: Tone::Warning,
            recoverable: false,
            action: RecoveryAction::navigate("task-feed"),
        },
        ErrorCode::Maintenance => ErrorUiConfig {
            tone: Tone::Info,
            recoverable: false,
            action: RecoveryAction::None,
        },
        ErrorCode::MissingRequiredField => ErrorUiConfig::fallback(),
    }
}

/// String-keyed lookup, total over arbitrary input. Unknown code names
/// degrade to [`ErrorUiConfig::fallback`].
pub fn error_config_for(code_name: &str) -> ErrorUiConfig {
    ErrorCode::parse(code_name)
        .map(error_config)
        .unwrap_or_else(ErrorUiConfig::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [ErrorCode; 14] = [
        ErrorCode::NetworkError,
        ErrorCode::Timeout,
        ErrorCode::ServerError,
        ErrorCode::InvalidJson,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::EligibilityFailed,
        ErrorCode::TrustTierRequired,
        ErrorCode::TaskExpired,
        ErrorCode::TaskTaken,
        ErrorCode::Maintenance,
        ErrorCode::InvalidResponse,
        ErrorCode::MissingRequiredField,
    ];

    #[test]
    fn test_total_over_all_codes() {
        for code in ALL_CODES {
            // Every code yields a config; the match is exhaustive by
            // construction, this guards the wire-name path too.
            let config = error_config_for(code.as_str());
            assert_eq!(config, error_config(code));
        }
    }

    #[test]
    fn test_unknown_codes_degrade_conservatively() {
        for name in ["", "SOMETHING_NEW", "network_error", "TIMEOUT "] {
            assert_eq!(error_config_for(name), ErrorUiConfig::fallback());
        }
    }

    #[test]
    fn test_connectivity_failures_offer_retry() {
        let config = error_config(ErrorCode::NetworkError);
        assert!(config.recoverable);
        assert_eq!(config.action, RecoveryAction::Retry);
        assert_eq!(config.tone, Tone::Warning);
    }

    #[test]
    fn test_unauthorized_routes_to_sign_in() {
        let config = error_config(ErrorCode::Unauthorized);
        assert_eq!(
            config.action,
            RecoveryAction::Navigate {
                destination: "sign-in".to_string()
            }
        );
    }

    #[test]
    fn test_maintenance_has_no_action() {
        let config = error_config(ErrorCode::Maintenance);
        assert_eq!(config.tone, Tone::Info);
        assert!(!config.recoverable);
        assert_eq!(config.action, RecoveryAction::None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(RecoveryAction::Retry.label(), "retry");
        assert_eq!(RecoveryAction::Back.label(), "back");
        assert_eq!(RecoveryAction::navigate("trust-tier").label(), "navigate");
        assert_eq!(RecoveryAction::None.label(), "none");
    }
}
