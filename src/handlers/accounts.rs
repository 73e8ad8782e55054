//! Account balance HTTP handlers.
//!
//! This module implements the balance-related API endpoints:
//! - GET /api/v1/accounts - List all accounts of the caller's company
//! - GET /api/v1/accounts/{id} - Get a single account

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::account::{Account, AccountResponse},
    state::AppState,
};

/// List all accounts for the authenticated company.
///
/// # Endpoint
///
/// `GET /api/v1/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty)
/// - **Error (401)**: Invalid session
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "account_name": "Operating Account",
///     "currency": "USD",
///     "balance_cents": 100000,
///     "created_at": "2025-03-20T10:00:00Z",
///     "updated_at": "2025-03-20T10:00:00Z"
///   }
/// ]
/// ```
///
/// # Ordering
///
/// Accounts are returned in reverse chronological order (newest first).
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    // Fetch all accounts for this company
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, company_id, account_name, currency, balance_cents, created_at, updated_at
        FROM accounts
        WHERE company_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth.company_id)
    .fetch_all(&state.pool)
    .await?;

    // Convert each Account to AccountResponse
    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific account by ID.
///
/// # URL Parameters
///
/// - `id` - UUID of the account to retrieve
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: Account not found or not owned by the caller's company
/// - **Error (401)**: Invalid session
///
/// # Security Note
///
/// The query filters by BOTH `id` AND `company_id` so companies can only
/// access their own accounts. Someone else's account looks identical to a
/// nonexistent one.
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    // Query account by ID AND company_id (ownership filter)
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, company_id, account_name, currency, balance_cents, created_at, updated_at
        FROM accounts
        WHERE id = $1 AND company_id = $2
        "#,
    )
    .bind(account_id)
    .bind(auth.company_id)
    .fetch_optional(&state.pool)
    .await?
    // Return 404 if not found
    .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}
