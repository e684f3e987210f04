//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use point_ledger_core::PointError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The amount was missing, zero, or negative.
    #[error("amount must be a positive integer")]
    InvalidAmount,

    /// The user id failed validation.
    #[error("invalid user id: {user_id}")]
    InvalidUserId {
        /// The rejected user id.
        user_id: i64,
    },

    /// No balance record exists for the user.
    #[error("user not found: {user_id}")]
    UserNotFound {
        /// The user id with no balance record.
        user_id: i64,
    },

    /// Accepting the charge would push the balance to or past the ceiling.
    #[error("balance ceiling exceeded: balance={balance}, amount={amount}")]
    BalanceCeilingExceeded {
        /// Balance before the charge.
        balance: i64,
        /// The rejected charge amount.
        amount: i64,
    },

    /// The spend exceeds the current balance.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientBalance {
        /// Current balance.
        balance: i64,
        /// Requested spend.
        required: i64,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                "invalid_amount",
                self.to_string(),
                None,
            ),
            Self::InvalidUserId { .. } => (
                StatusCode::BAD_REQUEST,
                "invalid_user_id",
                self.to_string(),
                None,
            ),
            Self::UserNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                self.to_string(),
                None,
            ),
            Self::BalanceCeilingExceeded { balance, amount } => (
                StatusCode::BAD_REQUEST,
                "balance_ceiling_exceeded",
                self.to_string(),
                Some(serde_json::json!({
                    "balance": balance,
                    "amount": amount
                })),
            ),
            Self::InsufficientBalance { balance, required } => (
                StatusCode::BAD_REQUEST,
                "insufficient_balance",
                self.to_string(),
                Some(serde_json::json!({
                    "balance": balance,
                    "required": required
                })),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PointError> for ApiError {
    fn from(err: PointError) -> Self {
        match err {
            PointError::InvalidAmount => Self::InvalidAmount,
            PointError::InvalidUserId { user_id } => Self::InvalidUserId { user_id },
            PointError::UserNotFound { user_id } => Self::UserNotFound { user_id },
            PointError::BalanceCeilingExceeded { balance, amount } => {
                Self::BalanceCeilingExceeded { balance, amount }
            }
            PointError::InsufficientBalance { balance, required } => {
                Self::InsufficientBalance { balance, required }
            }
            PointError::Storage(msg) => Self::Internal(msg),
        }
    }
}
