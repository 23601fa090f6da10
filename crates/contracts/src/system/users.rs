use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{opt_string, string_id};
use crate::shared::validation::{require, ValidationError};
use crate::system::roles::Role;

/// Row of the admin user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "opt_string")]
    pub created_at: Option<String>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for CreateUserDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Sales,
        }
    }
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("a name", &self.name)?;
        require("an email address", &self.email)?;
        if !self.email.contains('@') {
            return Err(ValidationError::Invalid {
                field: "Email",
                expected: "a valid email address",
            });
        }
        require("a password", &self.password)
    }
}

/// Head count per role for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub sales: usize,
    pub purchase: usize,
    pub admin: usize,
    pub unassigned: usize,
}

impl RoleCounts {
    pub fn tally(users: &[User]) -> Self {
        users.iter().fold(Self::default(), |mut acc, user| {
            match user.role() {
                Some(Role::Sales) => acc.sales += 1,
                Some(Role::Purchase) => acc.purchase += 1,
                Some(Role::Admin) => acc.admin += 1,
                None => acc.unassigned += 1,
            }
            acc
        })
    }

    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Sales => self.sales,
            Role::Purchase => self.purchase,
            Role::Admin => self.admin,
        }
    }

    pub fn total(&self) -> usize {
        self.sales + self.purchase + self.admin + self.unassigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "1".into(),
            name: "n".into(),
            email: "e@x.io".into(),
            role: role.into(),
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn tally_counts_each_role_and_unknowns() {
        let users = vec![user("sales"), user("sales"), user("admin"), user("manager")];
        let counts = RoleCounts::tally(&users);
        assert_eq!(counts.get(Role::Sales), 2);
        assert_eq!(counts.get(Role::Purchase), 0);
        assert_eq!(counts.get(Role::Admin), 1);
        assert_eq!(counts.unassigned, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn create_user_requires_fields() {
        let mut dto = CreateUserDto::default();
        assert_eq!(dto.validate(), Err(ValidationError::Missing("a name")));
        dto.name = "Lee".into();
        dto.email = "lee".into();
        assert!(matches!(dto.validate(), Err(ValidationError::Invalid { .. })));
        dto.email = "lee@x.io".into();
        assert_eq!(dto.validate(), Err(ValidationError::Missing("a password")));
        dto.password = "secret".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn create_user_serializes_role_lowercase() {
        let dto = CreateUserDto {
            name: "a".into(),
            email: "a@x.io".into(),
            password: "p".into(),
            role: Role::Purchase,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["role"], "purchase");
    }
}
