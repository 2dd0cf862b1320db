//! Access policy for member-only operations

use serde::{Deserialize, Serialize};
use tudofresco_domain::AccessLevel;

/// Levels admitted to the member area (stores, demands, profile)
pub const MEMBER_ROLES: &[AccessLevel] = &[AccessLevel::StoreOwner, AccessLevel::Admin];

/// Point-in-time view of the session, for display and route guards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub role: AccessLevel,
    pub user_id: Option<String>,
    /// Expiration in epoch seconds, if a credential decodes
    pub expires_at: Option<i64>,
}

impl SessionSnapshot {
    pub fn guest() -> Self {
        Self { authenticated: false, role: AccessLevel::Guest, user_id: None, expires_at: None }
    }

    /// Route-guard check: authenticated and the role is one of `allowed`
    pub fn permits(&self, allowed: &[AccessLevel]) -> bool {
        self.authenticated && allowed.contains(&self.role)
    }
}
