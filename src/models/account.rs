//! Account data models and API response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a company account
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Belongs to one company (via `company_id`)
/// - Has a balance stored in cents (to avoid floating-point errors)
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents. For example:
/// - $10.50 is stored as 1050 cents
/// - $100.00 is stored as 10000 cents
///
/// Balances only change through the database procedures; the API never
/// updates them directly.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Foreign key to the company that owns this account
    ///
    /// Every account query filters by `company_id` so one company can never
    /// see another company's accounts.
    pub company_id: Uuid,

    /// Human-readable name for this account
    pub account_name: String,

    /// Currency code (ISO 4217, 3 letters)
    pub currency: String,

    /// Current balance in cents (not dollars)
    ///
    /// Must be >= 0 (enforced by database CHECK constraint).
    pub balance_cents: i64,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last balance update
    pub updated_at: DateTime<Utc>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "account_name": "Operating Account",
///   "currency": "USD",
///   "balance_cents": 100000,
///   "created_at": "2025-03-20T10:00:00Z",
///   "updated_at": "2025-03-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: Uuid,

    /// Account name
    pub account_name: String,

    /// Currency code
    pub currency: String,

    /// Current balance in cents
    pub balance_cents: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Convert database Account to API AccountResponse.
///
/// This removes the internal `company_id` field.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_name: account.account_name,
            currency: account.currency,
            balance_cents: account.balance_cents,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
