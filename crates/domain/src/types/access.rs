//! Access levels carried in the `role` claim

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum;

/// Permission tier of the authenticated principal
///
/// The set is closed. Deserializing an unknown value yields [`AccessLevel::Guest`]
/// so a payload can never grant more access than it names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Admin,
    StoreOwner,
    Employee,
    #[default]
    #[serde(other)]
    Guest,
}

impl_wire_enum!(AccessLevel {
    Admin => "ADMIN", "Administrador",
    StoreOwner => "STORE_OWNER", "Dono da Loja",
    Employee => "EMPLOYEE", "Funcionário",
    Guest => "GUEST", "Convidado",
});

impl AccessLevel {
    /// Exact match against the wire values, as required for token claims.
    pub fn from_claim(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.as_str() == value)
    }

    /// Parse any role string, failing closed to [`AccessLevel::Guest`].
    pub fn from_claim_or_guest(value: &str) -> Self {
        Self::from_claim(value).unwrap_or(Self::Guest)
    }

    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_parsing_is_exact() {
        assert_eq!(AccessLevel::from_claim("STORE_OWNER"), Some(AccessLevel::StoreOwner));
        assert_eq!(AccessLevel::from_claim("store_owner"), None);
        assert_eq!(AccessLevel::from_claim("ROOT"), None);
    }

    #[test]
    fn unknown_roles_fail_closed_to_guest() {
        assert_eq!(AccessLevel::from_claim_or_guest("SUPERUSER"), AccessLevel::Guest);
        let parsed: AccessLevel = serde_json::from_str("\"SUPERUSER\"").unwrap();
        assert_eq!(parsed, AccessLevel::Guest);
    }

    #[test]
    fn serializes_wire_values() {
        assert_eq!(serde_json::to_string(&AccessLevel::StoreOwner).unwrap(), "\"STORE_OWNER\"");
        assert_eq!(AccessLevel::Employee.label(), "Funcionário");
        assert!(!AccessLevel::Guest.is_authenticated());
    }
}
