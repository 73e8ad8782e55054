//! Withdrawal request data models and API request/response types.
//!
//! This module defines:
//! - `WithdrawalRequest`: Database entity representing a withdrawal request
//! - `CreateWithdrawalRequest`: Request body for submitting a withdrawal
//! - `WithdrawalResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a withdrawal request record from the database.
///
/// # Database Table
///
/// Maps to the `withdrawal_requests` table. Submitting a withdrawal reserves
/// the funds immediately inside `submit_withdrawal_request`; a rejection is
/// refunded by the back-office flow.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct WithdrawalRequest {
    /// Unique identifier for this request
    pub id: Uuid,

    /// Company that submitted the request
    pub company_id: Uuid,

    /// Account the funds leave from
    pub account_id: Uuid,

    /// Amount in cents
    pub amount_cents: i64,

    /// Currency code, copied from the source account
    pub currency: String,

    /// Destination identifier at the payments provider
    pub receiver_key: String,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Request status (`pending`, `approved`, `rejected`, `settled`)
    pub status: String,

    /// Portal user who submitted the request
    pub requested_by: Uuid,

    /// When the request was created
    pub created_at: DateTime<Utc>,

    /// When the request was last updated
    pub updated_at: DateTime<Utc>,
}

/// Request to submit a withdrawal.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 25000,
///   "receiver_key": "rcv_8f3a1c",
///   "description": "Supplier payment"
/// }
/// ```
///
/// # Validation
///
/// - `amount_cents`: Required, must be positive
/// - `receiver_key`: Required, must be non-empty
/// - Balance and daily-limit checks happen in the database procedure
#[derive(Debug, Deserialize)]
pub struct CreateWithdrawalRequest {
    /// Account to withdraw from
    pub account_id: Uuid,

    /// Amount in cents
    pub amount_cents: i64,

    /// Destination identifier at the payments provider
    pub receiver_key: String,

    /// Optional description
    pub description: Option<String>,
}

/// Response returned for withdrawal request operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "880e8400-e29b-41d4-a716-446655440003",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 25000,
///   "currency": "USD",
///   "receiver_key": "rcv_8f3a1c",
///   "description": "Supplier payment",
///   "status": "pending",
///   "created_at": "2025-03-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct WithdrawalResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub receiver_key: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Convert a database row to the API response shape.
impl From<WithdrawalRequest> for WithdrawalResponse {
    fn from(request: WithdrawalRequest) -> Self {
        Self {
            id: request.id,
            account_id: request.account_id,
            amount_cents: request.amount_cents,
            currency: request.currency,
            receiver_key: request.receiver_key,
            description: request.description,
            status: request.status,
            created_at: request.created_at,
        }
    }
}
