//! Inbound webhook from the payments provider.
//!
//! The provider rotates the receiver that companies deposit to and pushes
//! the new value here. The endpoint is public but signature-authenticated:
//! every request must carry an HMAC-SHA256 of the raw body computed with
//! the shared webhook secret.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::{error::AppError, models::receiver::PaymentsWebhookEvent, state::AppState};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the payload signature.
const SIGNATURE_HEADER: &str = "X-Payments-Signature";

/// Handle a payments provider webhook.
///
/// # Endpoint
///
/// `POST /webhooks/payments`
///
/// # Headers
///
/// ```text
/// X-Payments-Signature: sha256=<hex HMAC-SHA256 of the raw body>
/// ```
///
/// # Request Body
///
/// ```json
/// {
///   "event": "receiver.rotated",
///   "receiver": {
///     "key": "rcv_2b77d0",
///     "holder_name": "Portal Collections Inc",
///     "bank_name": "First National",
///     "currency": "USD"
///   }
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"received": true}`, also for event types this
///   service does not care about
/// - **Error (401)**: Missing or wrong signature
/// - **Error (400)**: Undecodable body, or `receiver.rotated` without a
///   receiver
///
/// # Behavior
///
/// `receiver.rotated` replaces the cached deposit receiver for the event's
/// currency. The cache is in-memory and best effort; nothing is persisted.
pub async fn payments_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    // Authenticate the payload before parsing it
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    verify_signature(&state.config.payments_webhook_secret, &body, signature)?;

    let event: PaymentsWebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidRequest(format!("undecodable webhook body: {e}")))?;

    match event.event.as_str() {
        "receiver.rotated" => {
            let receiver = event.receiver.ok_or_else(|| {
                AppError::InvalidRequest("receiver.rotated event without receiver".to_string())
            })?;

            tracing::info!(
                currency = %receiver.currency,
                key = %receiver.key,
                "deposit receiver rotated"
            );

            state
                .receiver_cache
                .write()
                .await
                .insert(receiver.currency.clone(), receiver);
        }
        other => {
            // Acknowledge so the provider does not retry forever
            tracing::warn!("ignoring unknown payments webhook event '{other}'");
        }
    }

    Ok(Json(json!({ "received": true })))
}

/// Verify an `sha256=<hex>` signature over the raw payload.
///
/// # Verification
///
/// 1. Strip the `sha256=` prefix and hex-decode the rest
/// 2. Compute HMAC-SHA256(secret, payload)
/// 3. Compare in constant time
fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> Result<(), AppError> {
    let hex_digest = signature
        .strip_prefix("sha256=")
        .ok_or(AppError::InvalidSignature)?;

    let expected = hex::decode(hex_digest).map_err(|_| AppError::InvalidSignature)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AppError::InvalidSignature)?;
    mac.update(payload);

    mac.verify_slice(&expected)
        .map_err(|_| AppError::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn accepts_matching_signature() {
        let payload = br#"{"event":"receiver.rotated"}"#;
        let signature = sign("secret", payload);
        assert!(verify_signature("secret", payload, &signature).is_ok());
    }

    #[test]
    fn rejects_wrong_secret() {
        let payload = br#"{"event":"receiver.rotated"}"#;
        let signature = sign("other-secret", payload);
        assert!(verify_signature("secret", payload, &signature).is_err());
    }

    #[test]
    fn rejects_tampered_payload() {
        let signature = sign("secret", b"original");
        assert!(verify_signature("secret", b"tampered", &signature).is_err());
    }

    #[test]
    fn rejects_missing_prefix() {
        let payload = b"payload";
        let raw_hex = sign("secret", payload).trim_start_matches("sha256=").to_string();
        assert!(verify_signature("secret", payload, &raw_hex).is_err());
    }

    #[test]
    fn rejects_invalid_hex() {
        assert!(verify_signature("secret", b"payload", "sha256=zzzz").is_err());
    }
}
