//! Portal session model for authentication.
//!
//! Sessions are issued by the identity provider when a company user logs in.
//! They are stored in the database as SHA-256 token hashes, so a leaked
//! database dump does not leak usable tokens.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a session record from the database.
///
/// # Database Table
///
/// Maps to the `portal_sessions` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `token_hash`: SHA-256 hash of the bearer token
/// - `login_email`: Address the user logged in with, possibly aliased
/// - `expires_at`: When the session stops being valid
/// - `created_at`: When the session was issued
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    /// Unique identifier for this session
    pub id: Uuid,

    /// SHA-256 hash of the bearer token (64 hex characters)
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash among unexpired sessions
    /// 3. If found, resolve the login email to a portal user
    pub token_hash: String,

    /// Email address as issued by the identity provider
    ///
    /// May carry a plus-alias (`finance+acme@example.com`); it is
    /// normalized before the portal user lookup.
    pub login_email: String,

    /// Timestamp after which this session is rejected
    pub expires_at: DateTime<Utc>,

    /// Timestamp when this session was issued
    pub created_at: DateTime<Utc>,
}
