//! History filter shared by the deposit and withdrawal listing endpoints.

use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;

/// Statuses a request can be in. Anything else in a `status` filter is a
/// client error rather than an empty result.
const VALID_STATUSES: [&str; 4] = ["pending", "approved", "rejected", "settled"];

/// Default page size when `limit` is not given.
const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on the page size; larger values are clamped.
const MAX_LIMIT: i64 = 200;

/// Query parameters accepted by the history endpoints.
///
/// # Example
///
/// `GET /api/v1/deposits?status=pending&limit=20&offset=40`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryFilter {
    /// Only return requests in this status
    pub status: Option<String>,

    /// Only return requests targeting this account
    pub account_id: Option<Uuid>,

    /// Page size, defaults to 50, capped at 200
    pub limit: Option<i64>,

    /// Number of rows to skip, defaults to 0
    pub offset: Option<i64>,
}

impl HistoryFilter {
    /// Validate the status filter against the known set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when the status is not one of
    /// `pending`, `approved`, `rejected`, `settled`.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(ref status) = self.status {
            if !VALID_STATUSES.contains(&status.as_str()) {
                return Err(AppError::InvalidRequest(format!(
                    "unknown status '{status}', expected one of: {}",
                    VALID_STATUSES.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Effective page size after defaulting and clamping.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset after defaulting and clamping.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_statuses() {
        for status in VALID_STATUSES {
            let filter = HistoryFilter {
                status: Some(status.to_string()),
                ..Default::default()
            };
            assert!(filter.validate().is_ok(), "status {status} should be valid");
        }
    }

    #[test]
    fn accepts_absent_status() {
        assert!(HistoryFilter::default().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_status() {
        let filter = HistoryFilter {
            status: Some("open".to_string()),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(HistoryFilter::default().limit(), 50);

        let oversized = HistoryFilter {
            limit: Some(10_000),
            ..Default::default()
        };
        assert_eq!(oversized.limit(), 200);

        let nonpositive = HistoryFilter {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(nonpositive.limit(), 1);
    }

    #[test]
    fn offset_never_negative() {
        let filter = HistoryFilter {
            offset: Some(-5),
            ..Default::default()
        };
        assert_eq!(filter.offset(), 0);
    }
}
