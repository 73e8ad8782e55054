//! Payments API proxy HTTP handlers.
//!
//! The browser never talks to the payments provider directly; these routes
//! proxy the two lookups the portal pages need:
//! - GET /api/v1/payments/receiver - Confirm a receiver key before paying
//! - GET /api/v1/payments/deposit-receiver - Where to send deposits

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::receiver::{DepositReceiver, ReceiverInfo},
    services::payments_client,
    state::AppState,
};

/// Query parameters for the receiver lookup.
#[derive(Debug, Deserialize)]
pub struct ReceiverLookupQuery {
    /// Receiver key to look up
    pub key: Option<String>,
}

/// Query parameters for the deposit receiver.
#[derive(Debug, Deserialize)]
pub struct DepositReceiverQuery {
    /// Currency to deposit, defaults to USD
    pub currency: Option<String>,
}

/// Look up a receiver key at the payments provider.
///
/// # Endpoint
///
/// `GET /api/v1/payments/receiver?key=rcv_8f3a1c`
///
/// # Response
///
/// - **Success (200 OK)**: Receiver details as returned by the provider
/// - **Error (400)**: Missing or empty `key`
/// - **Error (404)**: Provider does not know the key
/// - **Error (502)**: Provider unreachable or misbehaving
/// - **Error (401)**: Invalid session
pub async fn lookup_receiver(
    State(state): State<Arc<AppState>>,
    Extension(_auth): Extension<AuthContext>,
    Query(query): Query<ReceiverLookupQuery>,
) -> Result<Json<ReceiverInfo>, AppError> {
    // The one required field
    let key = query
        .key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("key is required".to_string()))?;

    let info = payments_client::lookup_receiver(&state, key).await?;

    Ok(Json(info))
}

/// Get the receiver companies should deposit to for a currency.
///
/// # Endpoint
///
/// `GET /api/v1/payments/deposit-receiver?currency=USD`
///
/// # Response
///
/// - **Success (200 OK)**: The active deposit receiver
/// - **Error (502)**: Cache is cold and the provider is unreachable
/// - **Error (401)**: Invalid session
///
/// # Caching
///
/// Served from the in-memory cache when the provider's webhook has
/// delivered a receiver for the currency. On a miss (e.g. right after a
/// restart) the provider is asked directly and the answer is cached.
pub async fn deposit_receiver(
    State(state): State<Arc<AppState>>,
    Extension(_auth): Extension<AuthContext>,
    Query(query): Query<DepositReceiverQuery>,
) -> Result<Json<DepositReceiver>, AppError> {
    let currency = query
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("USD")
        .to_uppercase();

    // Fast path: webhook-delivered value
    if let Some(receiver) = state.receiver_cache.read().await.get(&currency) {
        return Ok(Json(receiver.clone()));
    }

    // Cold cache: ask the provider and remember the answer
    let receiver = payments_client::current_deposit_receiver(&state, &currency).await?;

    state
        .receiver_cache
        .write()
        .await
        .insert(currency, receiver.clone());

    Ok(Json(receiver))
}
