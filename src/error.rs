//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid sessions or webhook signatures
/// - **Resource Errors**: Requested resources not found
/// - **Business Logic Errors**: Rejections raised by the database procedures
/// - **Upstream Errors**: The payments API is unreachable or misbehaving
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session token is missing, unknown, or expired.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid session")]
    InvalidSession,

    /// Inbound webhook signature is missing or does not match the payload.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Requested account does not exist or belongs to another company.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// The payments provider does not know the requested receiver key.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Receiver not found")]
    ReceiverNotFound,

    /// Account has insufficient balance for the requested withdrawal.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// The withdrawal would exceed the company's daily limit.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Daily withdrawal limit exceeded")]
    WithdrawalLimitExceeded,

    /// The payments API returned an unexpected response or was unreachable.
    ///
    /// Returns HTTP 502 Bad Gateway. The detail string is logged, never
    /// returned to the client.
    #[error("Payments API error: {0}")]
    PaymentsApi(String),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidSession`, `InvalidSignature` → 401 Unauthorized
/// - `AccountNotFound`, `ReceiverNotFound` → 404 Not Found
/// - `InsufficientBalance`, `WithdrawalLimitExceeded` → 422 Unprocessable Entity
/// - `InvalidRequest` → 400 Bad Request
/// - `PaymentsApi` → 502 Bad Gateway (hides details from client)
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                "invalid_session",
                self.to_string(),
            ),
            AppError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "invalid_signature",
                self.to_string(),
            ),
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::ReceiverNotFound => (
                StatusCode::NOT_FOUND,
                "receiver_not_found",
                self.to_string(),
            ),
            AppError::InsufficientBalance => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_balance",
                self.to_string(),
            ),
            AppError::WithdrawalLimitExceeded => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "withdrawal_limit_exceeded",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::PaymentsApi(ref detail) => {
                tracing::error!("payments API failure: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "payments_unavailable",
                    "The payments provider is unavailable".to_string(),
                )
            }
            AppError::Database(ref err) => {
                tracing::error!("database failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn error_variants_map_to_expected_statuses() {
        assert_eq!(status_of(AppError::InvalidSession), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AppError::InvalidSignature),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::AccountNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(AppError::ReceiverNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::InsufficientBalance),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::WithdrawalLimitExceeded),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::InvalidRequest("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::PaymentsApi("timeout".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
