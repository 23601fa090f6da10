use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use serde::{Deserialize, Serialize};

/// Token and profile of the signed-in user. Both are written together, so
/// `user` is present exactly when a login succeeded and no logout followed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn login(&mut self, token: String, user: UserInfo) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserInfo::role)
    }
}

#[cfg(test)]
pub(crate) fn user_with_role(role: &str) -> UserInfo {
    UserInfo {
        id: "u-1".into(),
        name: "Test User".into(),
        email: Some("test@example.com".into()),
        role: role.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout() {
        let mut s = Session::default();
        assert!(!s.is_logged_in());
        assert_eq!(s.role(), None);

        s.login("tok".into(), user_with_role("purchase"));
        assert!(s.is_logged_in());
        assert_eq!(s.role(), Some(Role::Purchase));

        s.logout();
        assert_eq!(s, Session::default());
    }

    #[test]
    fn unknown_role_is_logged_in_without_role() {
        let mut s = Session::default();
        s.login("tok".into(), user_with_role("manager"));
        assert!(s.is_logged_in());
        assert_eq!(s.role(), None);
    }
}
