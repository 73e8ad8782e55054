//! Portal service: stored-procedure invocation and history queries.
//!
//! Business rules for deposits and withdrawals (ownership, balance
//! sufficiency, daily limits) live in database procedures so that every
//! writer goes through the same checks. This module invokes them and maps
//! the errors they raise onto the application error type.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::deposit::DepositRequest,
    models::history::HistoryFilter,
    models::limit::LimitUsage,
    models::withdrawal::WithdrawalRequest,
};

/// Submit a deposit request through `submit_deposit_request`.
///
/// The procedure verifies account ownership, copies the account currency
/// onto the request, and inserts the row in `pending` status. Balances are
/// untouched; settlement happens when the back office approves.
///
/// # Errors
///
/// - `AccountNotFound`: account is unknown or owned by another company
/// - `InvalidRequest`: the procedure rejected the amount
/// - `Database`: any other database error
pub async fn submit_deposit(
    pool: &DbPool,
    company_id: Uuid,
    user_id: Uuid,
    account_id: Uuid,
    amount_cents: i64,
    reference: &str,
) -> Result<DepositRequest, AppError> {
    sqlx::query_as::<_, DepositRequest>(
        "SELECT * FROM submit_deposit_request($1, $2, $3, $4, $5)",
    )
    .bind(company_id)
    .bind(user_id)
    .bind(account_id)
    .bind(amount_cents)
    .bind(reference)
    .fetch_one(pool)
    .await
    .map_err(map_procedure_error)
}

/// Submit a withdrawal request through `submit_withdrawal_request`.
///
/// The procedure locks the account row, checks the balance and the
/// company's daily limit for the account currency, reserves the funds, and
/// inserts the row in `pending` status.
///
/// # Errors
///
/// - `AccountNotFound`: account is unknown or owned by another company
/// - `InsufficientBalance`: balance is lower than the requested amount
/// - `WithdrawalLimitExceeded`: today's requests plus this one exceed the
///   configured daily limit
/// - `Database`: any other database error
pub async fn submit_withdrawal(
    pool: &DbPool,
    company_id: Uuid,
    user_id: Uuid,
    account_id: Uuid,
    amount_cents: i64,
    receiver_key: &str,
    description: Option<&str>,
) -> Result<WithdrawalRequest, AppError> {
    sqlx::query_as::<_, WithdrawalRequest>(
        "SELECT * FROM submit_withdrawal_request($1, $2, $3, $4, $5, $6)",
    )
    .bind(company_id)
    .bind(user_id)
    .bind(account_id)
    .bind(amount_cents)
    .bind(receiver_key)
    .bind(description)
    .fetch_one(pool)
    .await
    .map_err(map_procedure_error)
}

/// List deposit requests for a company, newest first.
///
/// Optional filters narrow by status and account; pagination comes from the
/// filter's clamped limit/offset.
pub async fn list_deposits(
    pool: &DbPool,
    company_id: Uuid,
    filter: &HistoryFilter,
) -> Result<Vec<DepositRequest>, AppError> {
    let requests = sqlx::query_as::<_, DepositRequest>(
        r#"
        SELECT *
        FROM deposit_requests
        WHERE company_id = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::uuid IS NULL OR account_id = $3)
        ORDER BY created_at DESC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(company_id)
    .bind(filter.status.as_deref())
    .bind(filter.account_id)
    .bind(filter.limit())
    .bind(filter.offset())
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// List withdrawal requests for a company, newest first.
pub async fn list_withdrawals(
    pool: &DbPool,
    company_id: Uuid,
    filter: &HistoryFilter,
) -> Result<Vec<WithdrawalRequest>, AppError> {
    let requests = sqlx::query_as::<_, WithdrawalRequest>(
        r#"
        SELECT *
        FROM withdrawal_requests
        WHERE company_id = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::uuid IS NULL OR account_id = $3)
        ORDER BY created_at DESC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(company_id)
    .bind(filter.status.as_deref())
    .bind(filter.account_id)
    .bind(filter.limit())
    .bind(filter.offset())
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// Fetch the company's daily withdrawal limits with today's usage.
pub async fn limit_usage(pool: &DbPool, company_id: Uuid) -> Result<Vec<LimitUsage>, AppError> {
    let usage = sqlx::query_as::<_, LimitUsage>("SELECT * FROM withdrawal_limit_usage($1)")
        .bind(company_id)
        .fetch_all(pool)
        .await?;

    Ok(usage)
}

/// Map errors raised by the stored procedures onto typed variants.
///
/// The procedures raise exceptions with fixed messages; anything else is a
/// genuine database error.
fn map_procedure_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.message() {
            "account_not_found" => return AppError::AccountNotFound,
            "insufficient_balance" => return AppError::InsufficientBalance,
            "withdrawal_limit_exceeded" => return AppError::WithdrawalLimitExceeded,
            "invalid_amount" => {
                return AppError::InvalidRequest("amount_cents must be positive".to_string());
            }
            _ => {}
        }
    }

    AppError::Database(err)
}
