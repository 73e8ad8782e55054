//! Payment receiver models and inbound webhook payloads.
//!
//! Two shapes come from the payments provider:
//! - `ReceiverInfo`: result of a receiver-key lookup, proxied to the browser
//!   so users can confirm who they are about to pay
//! - `DepositReceiver`: the account companies should deposit to, rotated by
//!   the provider and delivered through the webhook

use serde::{Deserialize, Serialize};

/// Result of a receiver-key lookup at the payments provider.
///
/// # JSON Example
///
/// ```json
/// {
///   "key": "rcv_8f3a1c",
///   "holder_name": "Acme Supplies Ltd",
///   "bank_name": "First National",
///   "key_type": "business"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverInfo {
    /// Receiver identifier at the payments provider
    pub key: String,

    /// Name of the account holder
    pub holder_name: String,

    /// Bank holding the destination account
    pub bank_name: String,

    /// Kind of key (e.g. "business", "personal"), when the provider sends it
    pub key_type: Option<String>,
}

/// The active deposit receiver for one currency.
///
/// Delivered by the provider's `receiver.rotated` webhook and cached in
/// memory; also returned by the provider's current-receiver endpoint for
/// cold starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositReceiver {
    /// Receiver identifier companies should send funds to
    pub key: String,

    /// Name of the account holder
    pub holder_name: String,

    /// Bank holding the receiving account
    pub bank_name: String,

    /// Currency this receiver accepts
    pub currency: String,
}

/// Envelope of an inbound payments webhook.
///
/// # JSON Example
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
/// Unknown event types are acknowledged and ignored.
#[derive(Debug, Deserialize)]
pub struct PaymentsWebhookEvent {
    /// Event type, e.g. "receiver.rotated"
    pub event: String,

    /// Rotated receiver, present for `receiver.rotated` events
    pub receiver: Option<DepositReceiver>,
}
