//! Deposit request data models and API request/response types.
//!
//! This module defines:
//! - `DepositRequest`: Database entity representing a deposit request
//! - `CreateDepositRequest`: Request body for submitting a deposit
//! - `DepositResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a deposit request record from the database.
///
/// # Database Table
///
/// Maps to the `deposit_requests` table. A deposit request:
/// - Belongs to one company and targets one of its accounts
/// - Stores the amount in cents (never floats!)
/// - Starts in `pending` status; the back office moves it to `approved`,
///   `rejected`, or `settled`
///
/// Submitting a deposit request never changes a balance. The balance moves
/// when the request settles, inside the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DepositRequest {
    /// Unique identifier for this request
    pub id: Uuid,

    /// Company that submitted the request
    pub company_id: Uuid,

    /// Account the deposit targets
    pub account_id: Uuid,

    /// Amount in cents
    ///
    /// Must be positive (enforced by CHECK constraint)
    pub amount_cents: i64,

    /// Currency code, copied from the target account
    pub currency: String,

    /// Client-supplied or server-generated reference string
    ///
    /// Shown on statements and in notifications so the back office can
    /// match incoming funds to the request.
    pub reference: String,

    /// Request status
    ///
    /// - "pending": Awaiting review
    /// - "approved": Accepted, awaiting funds
    /// - "rejected": Declined
    /// - "settled": Funds credited
    pub status: String,

    /// Portal user who submitted the request
    pub requested_by: Uuid,

    /// When the request was created
    pub created_at: DateTime<Utc>,

    /// When the request was last updated
    pub updated_at: DateTime<Utc>,
}

/// Request to submit a deposit.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 100000,
///   "reference": "invoice-2025-042"
/// }
/// ```
///
/// # Validation
///
/// - `amount_cents`: Required, must be positive
/// - `reference`: Optional, generated when absent or blank
#[derive(Debug, Deserialize)]
pub struct CreateDepositRequest {
    /// Account to deposit into
    pub account_id: Uuid,

    /// Amount in cents
    pub amount_cents: i64,

    /// Optional reference string
    pub reference: Option<String>,
}

/// Response returned for deposit request operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 100000,
///   "currency": "USD",
///   "reference": "invoice-2025-042",
///   "status": "pending",
///   "created_at": "2025-03-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub reference: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Convert a database row to the API response shape.
///
/// This removes internal fields like `company_id` and `requested_by`.
impl From<DepositRequest> for DepositResponse {
    fn from(request: DepositRequest) -> Self {
        Self {
            id: request.id,
            account_id: request.account_id,
            amount_cents: request.amount_cents,
            currency: request.currency,
            reference: request.reference,
            status: request.status,
            created_at: request.created_at,
        }
    }
}
