use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::string_id;
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Profile of the signed-in user as returned by the login endpoint.
///
/// `role` stays a raw string so that a role this client does not know about
/// survives a round trip through local storage; use [`UserInfo::role`] for
/// decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else {
            self.email.as_deref().unwrap_or("User")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_with_numeric_id() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"t0k","user":{"id":7,"name":"Asha","email":"a@x.io","role":"sales"}}"#,
        )
        .unwrap();
        assert_eq!(resp.user.id, "7");
        assert_eq!(resp.user.role(), Some(Role::Sales));
    }

    #[test]
    fn unknown_role_is_kept_but_not_recognised() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"u1","name":"M","role":"manager"}"#).unwrap();
        assert_eq!(user.role, "manager");
        assert_eq!(user.role(), None);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "1".into(),
            name: " ".into(),
            email: Some("p@x.io".into()),
            role: "purchase".into(),
        };
        assert_eq!(user.display_name(), "p@x.io");
    }
}
