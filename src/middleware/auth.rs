//! Session authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the session token from the Authorization header
//! 2. Hash it and look up an unexpired session in the database
//! 3. Resolve the session's login email to an active company user
//! 4. Inject authentication context into the request
//! 5. Reject unauthorized requests with HTTP 401

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{error::AppError, models::company::CompanyUser, models::session::Session,
    state::AppState};

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know who made the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated portal user
    pub user_id: Uuid,

    /// Company the user belongs to
    ///
    /// Used to filter every data query (e.g., only show this company's
    /// accounts and requests)
    pub company_id: Uuid,

    /// Display name of the company, used in notification messages
    pub company_name: String,

    /// Canonical email address of the user
    pub email: String,
}

/// Session authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Query database for a matching unexpired session
/// 4. Normalize the session's login email and resolve it to an active
///    portal user joined with its company
/// 5. If resolved: inject `AuthContext` into request, call next handler
/// 6. If any step fails: return 401 Unauthorized
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer abc123xyz
/// ```
///
/// The identity provider may hand back aliased addresses
/// (`finance+acme@example.com`); the portal user table stores canonical
/// ones, so the alias is stripped before the lookup.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidSession)?;

    // Step 2: Extract Bearer token
    // Expected format: "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidSession)?;

    // Step 3: Hash the token using SHA-256
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let token_hash = hex::encode(hasher.finalize());

    // Step 4: Look up an unexpired session for the hash
    let session = sqlx::query_as::<_, Session>(
        "SELECT id, token_hash, login_email, expires_at, created_at
         FROM portal_sessions
         WHERE token_hash = $1 AND expires_at > NOW()",
    )
    .bind(&token_hash)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidSession)?;

    // Step 5: Resolve the (possibly aliased) login email to an active user
    let email = normalize_login_email(&session.login_email);

    let user = sqlx::query_as::<_, CompanyUser>(
        "SELECT u.id AS user_id, u.company_id, c.name AS company_name, u.email
         FROM portal_users u
         JOIN companies c ON c.id = u.company_id
         WHERE u.email = $1 AND u.is_active = true",
    )
    .bind(&email)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidSession)?;

    // Step 6: Create authentication context
    let auth_context = AuthContext {
        user_id: user.user_id,
        company_id: user.company_id,
        company_name: user.company_name,
        email: user.email,
    };

    // Step 7: Inject context into request extensions
    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    // Step 8: Call the next middleware/handler
    Ok(next.run(request).await)
}

/// Normalize a login email to its canonical form.
///
/// The identity provider returns whatever address the user typed. Portal
/// users are stored under a canonical address, so before the lookup we:
/// - trim surrounding whitespace
/// - lowercase the whole address
/// - strip a single `+alias` suffix from the local part
///   (`finance+acme@example.com` becomes `finance@example.com`)
///
/// Addresses without an `@` are trimmed and lowercased only.
pub fn normalize_login_email(email: &str) -> String {
    let email = email.trim().to_lowercase();

    let Some((local, domain)) = email.split_once('@') else {
        return email;
    };

    // Keep everything before the first '+' in the local part
    let local = match local.split_once('+') {
        Some((base, _alias)) => base,
        None => local,
    };

    format!("{local}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(
            normalize_login_email("  Finance@Example.COM "),
            "finance@example.com"
        );
    }

    #[test]
    fn strips_plus_alias() {
        assert_eq!(
            normalize_login_email("finance+acme@example.com"),
            "finance@example.com"
        );
    }

    #[test]
    fn strips_only_first_alias_separator() {
        assert_eq!(
            normalize_login_email("finance+acme+2025@example.com"),
            "finance@example.com"
        );
    }

    #[test]
    fn leaves_plus_in_domain_alone() {
        assert_eq!(
            normalize_login_email("finance@ex+ample.com"),
            "finance@ex+ample.com"
        );
    }

    #[test]
    fn handles_address_without_at() {
        assert_eq!(normalize_login_email("  NotAnEmail "), "notanemail");
    }

    #[test]
    fn plain_address_is_unchanged() {
        assert_eq!(
            normalize_login_email("finance@example.com"),
            "finance@example.com"
        );
    }
}
