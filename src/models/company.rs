//! Company-user model used by the authentication middleware.

use uuid::Uuid;

/// A portal user joined with the company it belongs to.
///
/// Produced by the session-to-user resolution query in the authentication
/// middleware. Only active users are ever loaded.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyUser {
    /// Portal user id
    pub user_id: Uuid,

    /// Company the user belongs to
    pub company_id: Uuid,

    /// Company display name, used in notification messages
    pub company_name: String,

    /// Canonical email address of the user
    pub email: String,
}
