//! Withdrawal limit HTTP handler.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};

use crate::{
    error::AppError, middleware::auth::AuthContext, models::limit::LimitUsage,
    services::portal_service, state::AppState,
};

/// Get the company's daily withdrawal limits with today's usage.
///
/// # Endpoint
///
/// `GET /api/v1/limits`
///
/// # Response
///
/// - **Success (200 OK)**: One entry per configured currency (may be empty
///   when the company has no limits configured)
/// - **Error (401)**: Invalid session
///
/// ```json
/// [
///   {
///     "currency": "USD",
///     "daily_limit_cents": 5000000,
///     "used_today_cents": 1200000,
///     "remaining_cents": 3800000
///   }
/// ]
/// ```
///
/// Limits are administered in the database; this endpoint is read-only.
pub async fn get_limits(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<LimitUsage>>, AppError> {
    let usage = portal_service::limit_usage(&state.pool, auth.company_id).await?;

    Ok(Json(usage))
}
