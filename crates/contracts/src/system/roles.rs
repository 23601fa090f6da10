use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by an authenticated user.
///
/// The backend sends roles as lowercase strings. Anything outside this set
/// (including the reserved `manager` value) is treated as "no role" by
/// [`Role::parse`], which keeps every role-gated decision fail-closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sales,
    Purchase,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Sales, Role::Purchase, Role::Admin];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sales" => Some(Role::Sales),
            "purchase" => Some(Role::Purchase),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sales => "sales",
            Role::Purchase => "purchase",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Sales => "Sales",
            Role::Purchase => "Purchase",
            Role::Admin => "Admin",
        }
    }

    /// Landing page after login and target of the "back" link on the
    /// unauthorized page.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Sales => "/sales/dashboard",
            Role::Purchase => "/purchase/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }

    /// Ticket list the role can open; target of "Back" on ticket details.
    pub fn tickets_path(&self) -> &'static str {
        match self {
            Role::Sales => "/ticketspage",
            Role::Purchase => "/purchase/dashboard",
            Role::Admin => "/admin/tickets",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_case_insensitively() {
        assert_eq!(Role::parse("sales"), Some(Role::Sales));
        assert_eq!(Role::parse(" Purchase "), Some(Role::Purchase));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    }

    #[test]
    fn reserved_and_unknown_roles_have_no_role() {
        assert_eq!(Role::parse("manager"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Purchase).unwrap(), "\"purchase\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn every_role_has_a_distinct_home() {
        let homes: std::collections::HashSet<_> = Role::ALL.iter().map(|r| r.home_path()).collect();
        assert_eq!(homes.len(), Role::ALL.len());
    }
}
