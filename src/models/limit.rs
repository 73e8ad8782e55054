//! Withdrawal limit usage model.

use serde::Serialize;

/// One row of the `withdrawal_limit_usage` procedure: the configured daily
/// limit for a currency together with today's usage.
///
/// # JSON Example
///
/// ```json
/// {
///   "currency": "USD",
///   "daily_limit_cents": 5000000,
///   "used_today_cents": 1200000,
///   "remaining_cents": 3800000
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct LimitUsage {
    /// Currency the limit applies to
    pub currency: String,

    /// Configured daily cap in cents
    pub daily_limit_cents: i64,

    /// Sum of today's non-rejected withdrawal requests in cents
    pub used_today_cents: i64,

    /// Remaining headroom in cents, never negative
    pub remaining_cents: i64,
}
