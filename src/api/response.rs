//! Response types for the Daily Wage Engine API.
//!
//! This module defines the response bodies and the error mapping for the
//! HTTP API. Worker-facing messages are bilingual, English then Hindi.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditTrace, Entry};
use crate::store::{OverallStats, UserStats};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error for a path segment or query string that did not parse.
    pub fn invalid_parameter(details: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_PARAMETER",
            "Invalid request parameter / अमान्य पैरामीटर",
            details,
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let details = error.to_string();
        let (status, code, message) = match error {
            EngineError::InvalidTimeFormat { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_TIME_FORMAT",
                "Invalid time, use HH:MM / गलत समय, HH:MM लिखें",
            ),
            EngineError::InvalidDuration { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_DURATION",
                "Invalid time - Out Time must be after In Time / आउट टाइम इन टाइम के बाद होना चाहिए",
            ),
            EngineError::InvalidRate { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_RATE",
                "Invalid salary or PF rate / सैलरी या PF दर गलत है",
            ),
            EngineError::InvalidPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_PERIOD",
                "Invalid month / गलत महीना",
            ),
            EngineError::InvalidUser { .. } => (
                StatusCode::BAD_REQUEST,
                "INVALID_USER",
                "Invalid user details / यूजर की जानकारी गलत है",
            ),
            EngineError::UserNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "User not found / यूजर नहीं मिला",
            ),
            EngineError::DuplicateUser { .. } => (
                StatusCode::CONFLICT,
                "DUPLICATE_USER",
                "Username already exists / यह यूजरनेम पहले से है",
            ),
            EngineError::RateNotSet { .. } => (
                StatusCode::BAD_REQUEST,
                "RATE_NOT_SET",
                "Please set your 8-hour salary first / पहले अपनी 8 घंटे की सैलरी सेट करें",
            ),
            EngineError::DuplicateEntry { .. } => (
                StatusCode::CONFLICT,
                "DUPLICATE_ENTRY",
                "Entry already exists for this date / इस तारीख के लिए पहले से एंट्री है",
            ),
            EngineError::EntryNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "ENTRY_NOT_FOUND",
                "Entry not found / एंट्री नहीं मिली",
            ),
            EngineError::AmountOverflow { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "AMOUNT_OVERFLOW",
                "Amount too large to total / रकम बहुत बड़ी है",
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Server error / सर्वर में समस्या",
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError::with_details(code, message, details),
        }
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Bilingual message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned after an entry is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCreatedResponse {
    /// Bilingual confirmation.
    pub message: String,
    /// The stored entry with its wage snapshot.
    pub entry: Entry,
    /// How the snapshot was derived.
    pub audit_trace: AuditTrace,
}

/// Body for the per-date lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryLookupResponse {
    /// Whether the user already logged this date.
    pub exists: bool,
    /// The entry, when it exists.
    pub entry: Option<Entry>,
}

/// Body for the PF setting routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfSettingResponse {
    /// PF percentage applied to new entries.
    pub pf_percentage: Decimal,
}

/// Body for the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUsersResponse {
    /// Users with their entry statistics.
    pub users: Vec<UserStats>,
    /// Store-wide statistics.
    pub stats: OverallStats,
}

/// Body returned after a user is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeletedResponse {
    /// Bilingual confirmation.
    pub message: String,
    /// Number of entries removed with the user.
    pub entries_removed: usize,
}
