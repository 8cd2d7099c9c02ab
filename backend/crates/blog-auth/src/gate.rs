use crate::Session;

use http::StatusCode;

/// Why a gate stopped a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No identity on the request
    Unauthenticated,
    /// Identity present but its role is not allowed
    Forbidden,
}

impl GateRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "You need to log in first.",
            Self::Forbidden => "Access Denied",
        }
    }
}

impl std::fmt::Display for GateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Halt(GateRejection),
}

impl GateDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// A pass/halt check placed in front of a route handler.
///
/// Implementations must be pure with respect to the session: same input,
/// same decision, and no writes.
pub trait Gate: Send + Sync {
    fn evaluate(&self, session: Option<&Session>) -> GateDecision;

    /// Short label for logs
    fn name(&self) -> String;
}
