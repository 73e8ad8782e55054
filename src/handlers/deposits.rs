//! Deposit request HTTP handlers.
//!
//! This module implements deposit-related API endpoints:
//! - POST /api/v1/deposits - Submit a deposit request
//! - GET /api/v1/deposits - List the company's deposit history

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
    models::deposit::{CreateDepositRequest, DepositResponse},
    models::history::HistoryFilter,
    services::notification_service::{self, RequestSummary},
    services::portal_service,
    state::AppState,
};

/// Submit a deposit request.
///
/// # Endpoint
///
/// `POST /api/v1/deposits`
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 100000,
///   "reference": "invoice-2025-042"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created request in `pending` status
/// - **Error (400)**: Amount is zero or negative
/// - **Error (404)**: Account not found or owned by another company
/// - **Error (401)**: Invalid session
///
/// A missing or blank reference is replaced with a generated one so the
/// back office always has something to match incoming funds against.
///
/// After the request is stored, the operations team is notified over the
/// configured channels; notification failures never fail the request.
pub async fn create_deposit(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateDepositRequest>,
) -> Result<(StatusCode, Json<DepositResponse>), AppError> {
    // Validate amount before going anywhere near the database
    if request.amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "amount_cents must be positive".to_string(),
        ));
    }

    // Verify account belongs to the authenticated company
    let account_id: Uuid =
        sqlx::query_scalar("SELECT id FROM accounts WHERE id = $1 AND company_id = $2")
            .bind(request.account_id)
            .bind(auth.company_id)
            .fetch_optional(&state.pool)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    // Fall back to a generated reference when none was given
    let reference = request
        .reference
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| format!("DEP-{}", Uuid::new_v4()));

    // Invoke the stored procedure
    let deposit = portal_service::submit_deposit(
        &state.pool,
        auth.company_id,
        auth.user_id,
        account_id,
        request.amount_cents,
        &reference,
    )
    .await?;

    // Best-effort notification to the operations team
    let summary = RequestSummary {
        kind: "deposit",
        company_name: auth.company_name.clone(),
        amount_cents: deposit.amount_cents,
        currency: deposit.currency.clone(),
        reference: deposit.reference.clone(),
    };
    notification_service::notify_request_submitted(&state, &summary).await;

    Ok((StatusCode::CREATED, Json(deposit.into())))
}

/// List the company's deposit requests.
///
/// # Endpoint
///
/// `GET /api/v1/deposits?status=pending&account_id=...&limit=50&offset=0`
///
/// # Response
///
/// - **Success (200 OK)**: Array of deposit requests, newest first
/// - **Error (400)**: Unknown status filter
/// - **Error (401)**: Invalid session
pub async fn list_deposits(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Query(filter): Query<HistoryFilter>,
) -> Result<Json<Vec<DepositResponse>>, AppError> {
    filter.validate()?;

    let deposits = portal_service::list_deposits(&state.pool, auth.company_id, &filter).await?;

    let responses: Vec<DepositResponse> = deposits.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
