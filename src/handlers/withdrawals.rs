//! Withdrawal request HTTP handlers.
//!
//! This module implements withdrawal-related API endpoints:
//! - POST /api/v1/withdrawals - Submit a withdrawal request
//! - GET /api/v1/withdrawals - List the company's withdrawal history

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::history::HistoryFilter,
    models::withdrawal::{CreateWithdrawalRequest, WithdrawalResponse},
    services::notification_service::{self, RequestSummary},
    services::portal_service,
    state::AppState,
};

/// Submit a withdrawal request.
///
/// # Endpoint
///
/// `POST /api/v1/withdrawals`
///
/// # Request Body
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
/// # Response
///
/// - **Success (201 Created)**: Returns the created request in `pending` status
/// - **Error (400)**: Amount not positive, or `receiver_key` empty
/// - **Error (404)**: Account not found or owned by another company
/// - **Error (422)**: Insufficient balance or daily limit exceeded
/// - **Error (401)**: Invalid session
///
/// # Validation
///
/// The handler checks field presence only; balance sufficiency and the
/// daily withdrawal limit are enforced by the database procedure, which
/// also reserves the funds.
pub async fn create_withdrawal(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateWithdrawalRequest>,
) -> Result<(StatusCode, Json<WithdrawalResponse>), AppError> {
    // Validate the couple of required fields
    if request.amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "amount_cents must be positive".to_string(),
        ));
    }

    if request.receiver_key.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "receiver_key is required".to_string(),
        ));
    }

    // Verify account ownership
    let account_id: Uuid =
        sqlx::query_scalar("SELECT id FROM accounts WHERE id = $1 AND company_id = $2")
            .bind(request.account_id)
            .bind(auth.company_id)
            .fetch_optional(&state.pool)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    // Invoke the stored procedure; it enforces balance and daily limit
    let withdrawal = portal_service::submit_withdrawal(
        &state.pool,
        auth.company_id,
        auth.user_id,
        account_id,
        request.amount_cents,
        request.receiver_key.trim(),
        request.description.as_deref(),
    )
    .await?;

    // Best-effort notification to the operations team
    let summary = RequestSummary {
        kind: "withdrawal",
        company_name: auth.company_name.clone(),
        amount_cents: withdrawal.amount_cents,
        currency: withdrawal.currency.clone(),
        reference: withdrawal.id.to_string(),
    };
    notification_service::notify_request_submitted(&state, &summary).await;

    Ok((StatusCode::CREATED, Json(withdrawal.into())))
}

/// List the company's withdrawal requests.
///
/// # Endpoint
///
/// `GET /api/v1/withdrawals?status=pending&account_id=...&limit=50&offset=0`
///
/// # Response
///
/// - **Success (200 OK)**: Array of withdrawal requests, newest first
/// - **Error (400)**: Unknown status filter
/// - **Error (401)**: Invalid session
pub async fn list_withdrawals(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Query(filter): Query<HistoryFilter>,
) -> Result<Json<Vec<WithdrawalResponse>>, AppError> {
    filter.validate()?;

    let withdrawals =
        portal_service::list_withdrawals(&state.pool, auth.company_id, &filter).await?;

    let responses: Vec<WithdrawalResponse> = withdrawals.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
