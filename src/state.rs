//! Shared application state.
//!
//! One `AppState` is built at startup and handed to every handler through
//! Axum's `State` extractor. It owns the database pool, the loaded
//! configuration, a single reqwest client reused for all outbound calls,
//! and the deposit-receiver cache.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::{config::Config, db::DbPool, models::receiver::DepositReceiver};

/// Timeout applied to every outbound HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared state for all request handlers.
pub struct AppState {
    /// Database connection pool
    pub pool: DbPool,

    /// Loaded configuration
    pub config: Config,

    /// HTTP client for the payments API and notification channels
    pub http: reqwest::Client,

    /// Active deposit receiver per currency, as last delivered by the
    /// payments provider's webhook.
    ///
    /// Best effort only: no eviction, not persisted. After a restart the
    /// deposit-receiver route falls back to the payments API until the next
    /// webhook arrives.
    pub receiver_cache: RwLock<HashMap<String, DepositReceiver>>,
}

impl AppState {
    /// Build application state from configuration and a database pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config, pool: DbPool) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self {
            pool,
            config,
            http,
            receiver_cache: RwLock::new(HashMap::new()),
        })
    }
}
