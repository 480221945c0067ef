//! Error types for the API client

use std::fmt;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client operations, one per backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /recommend`
    Recommend,
    /// `POST /availability`
    Availability,
    /// `GET /mypage/goals`
    ListGoals,
    /// `GET /goals/{id}`
    GoalDetail,
    /// `PATCH /goals/{id}/books/{isbn13}`
    UpdateBookStatus,
    /// `POST /goals`
    CreateGoal,
    /// `PATCH /goals/{id}/archive`
    ArchiveGoal,
    /// `POST /auth/register`
    Register,
    /// `POST /auth/login`
    Login,
    /// `GET /auth/me`
    CurrentUser,
    /// `GET /health`
    Health,
}

impl Operation {
    /// Fixed message reported when this operation fails
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Recommend => "Failed to fetch recommendations",
            Self::Availability => "Failed to fetch availability",
            Self::ListGoals => "Failed to fetch goals",
            Self::GoalDetail => "Failed to fetch goal detail",
            Self::UpdateBookStatus => "Failed to update status",
            Self::CreateGoal => "Failed to create goal",
            Self::ArchiveGoal => "Failed to archive goal",
            Self::Register => "Failed to register",
            Self::Login => "Failed to log in",
            Self::CurrentUser => "Failed to fetch current user",
            Self::Health => "Health check failed",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The exchange did not produce a successful, decodable response
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all end
    /// up here; the message is fixed per operation.
    #[error("{operation}")]
    RequestFailed {
        /// Operation that failed
        operation: Operation,
        /// HTTP status, when a response arrived
        status: Option<u16>,
        /// Underlying transport or decoding error
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Failure with a response status
    #[must_use]
    pub fn status(operation: Operation, status: u16) -> Self {
        Self::RequestFailed {
            operation,
            status: Some(status),
            source: None,
        }
    }

    /// Failure caused by the transport or by decoding
    #[must_use]
    pub fn transport(operation: Operation, source: reqwest::Error) -> Self {
        Self::RequestFailed {
            operation,
            status: source.status().map(|s| s.as_u16()),
            source: Some(source),
        }
    }

    /// Operation that failed, for request failures
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::RequestFailed { operation, .. } => Some(*operation),
            Self::Config(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// HTTP status of the failed response, if one arrived
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            Self::Config(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Whether the backend rejected the credential
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.http_status(), Some(401 | 403))
    }
}
