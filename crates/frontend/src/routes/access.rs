//! Who may open which page.
//!
//! One static table drives both the router guards and the tests. A rule with
//! an empty allow-list admits any signed-in user; everything else fails
//! closed when the user has no recognised role.

use contracts::system::roles::Role;

use crate::system::auth::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

const SALES: &[Role] = &[Role::Sales];
const PURCHASE: &[Role] = &[Role::Purchase];
const ADMIN: &[Role] = &[Role::Admin];
const STAFF: &[Role] = &[Role::Sales, Role::Purchase, Role::Admin];
const ANY_SIGNED_IN: &[Role] = &[];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAccessRule {
    pub pattern: &'static str,
    pub allowed: &'static [Role],
}

impl RouteAccessRule {
    /// Segment-wise match; `:name` segments match any single non-empty segment.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut want = self.pattern.trim_matches('/').split('/');
        let mut got = path.trim_matches('/').split('/');
        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some(w), Some(g)) if w.starts_with(':') && !g.is_empty() => {}
                (Some(w), Some(g)) if w == g => {}
                _ => return false,
            }
        }
    }

    pub fn permits(&self, role: Option<Role>) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        role.is_some_and(|r| self.allowed.contains(&r))
    }
}

pub const ROUTE_RULES: &[RouteAccessRule] = &[
    RouteAccessRule { pattern: "/sales/dashboard", allowed: SALES },
    RouteAccessRule { pattern: "/ticketspage", allowed: SALES },
    RouteAccessRule { pattern: "/tickets/createticket/newproduct", allowed: SALES },
    RouteAccessRule { pattern: "/tickets/createticket/existingproduct", allowed: SALES },
    RouteAccessRule { pattern: "/tickets/createticket/bulkorder", allowed: SALES },
    RouteAccessRule { pattern: "/tickets/:id", allowed: STAFF },
    RouteAccessRule { pattern: "/inventory", allowed: ANY_SIGNED_IN },
    RouteAccessRule { pattern: "/inventory/addnewproduct", allowed: ANY_SIGNED_IN },
    RouteAccessRule { pattern: "/purchase/dashboard", allowed: PURCHASE },
    RouteAccessRule { pattern: "/purchase/suppliers", allowed: PURCHASE },
    RouteAccessRule { pattern: "/purchase/suppliers/new", allowed: PURCHASE },
    RouteAccessRule { pattern: "/admin/dashboard", allowed: ADMIN },
    RouteAccessRule { pattern: "/admin/users", allowed: ADMIN },
    RouteAccessRule { pattern: "/admin/tickets", allowed: ADMIN },
];

/// Rule registered under exactly this pattern.
pub fn rule_for_pattern(pattern: &str) -> Option<&'static RouteAccessRule> {
    ROUTE_RULES.iter().find(|r| r.pattern == pattern)
}

/// First rule matching a concrete path. Literal segments win over `:id`
/// because the literal rules are listed first.
pub fn resolve(path: &str) -> Option<&'static RouteAccessRule> {
    ROUTE_RULES.iter().find(|r| r.matches(path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl GuardOutcome {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::RedirectToLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

pub fn authorize(session: &Session, rule: &RouteAccessRule) -> GuardOutcome {
    if !session.is_logged_in() {
        return GuardOutcome::RedirectToLogin;
    }
    if rule.permits(session.role()) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToUnauthorized
    }
}

/// Guard decision for a concrete path. Paths outside the table are public.
pub fn authorize_path(session: &Session, path: &str) -> GuardOutcome {
    match resolve(path) {
        Some(rule) => authorize(session, rule),
        None => GuardOutcome::Allow,
    }
}

/// Target of `/`: the role's dashboard, the login page when signed out, and
/// the unauthorized page for a signed-in user without a known role.
pub fn landing_path(session: &Session) -> &'static str {
    if !session.is_logged_in() {
        return LOGIN_PATH;
    }
    session
        .role()
        .map(|r| r.home_path())
        .unwrap_or(UNAUTHORIZED_PATH)
}

/// Where "Back" leads from a ticket: the viewer's own ticket list.
pub fn ticket_list_path(session: &Session) -> &'static str {
    session
        .role()
        .map(|r| r.tickets_path())
        .unwrap_or_else(|| landing_path(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::user_with_role;

    fn signed_in(role: &str) -> Session {
        let mut s = Session::default();
        s.login("tok".into(), user_with_role(role));
        s
    }

    #[test]
    fn signed_out_is_sent_to_login_everywhere() {
        let s = Session::default();
        for rule in ROUTE_RULES {
            assert_eq!(authorize(&s, rule), GuardOutcome::RedirectToLogin, "{}", rule.pattern);
        }
    }

    #[test]
    fn purchase_user_cannot_open_admin_dashboard() {
        let s = signed_in("purchase");
        let outcome = authorize_path(&s, "/admin/dashboard");
        assert_eq!(outcome, GuardOutcome::RedirectToUnauthorized);
        assert_eq!(outcome.redirect_path(), Some("/unauthorized"));
    }

    #[test]
    fn roles_reach_their_own_pages() {
        assert_eq!(authorize_path(&signed_in("sales"), "/ticketspage"), GuardOutcome::Allow);
        assert_eq!(authorize_path(&signed_in("purchase"), "/purchase/suppliers/new"), GuardOutcome::Allow);
        assert_eq!(authorize_path(&signed_in("admin"), "/admin/tickets"), GuardOutcome::Allow);
        for role in ["sales", "purchase", "admin"] {
            assert_eq!(authorize_path(&signed_in(role), "/tickets/42"), GuardOutcome::Allow);
            assert_eq!(authorize_path(&signed_in(role), "/inventory"), GuardOutcome::Allow);
        }
    }

    #[test]
    fn missing_or_unknown_role_fails_closed() {
        let manager = signed_in("manager");
        assert_eq!(authorize_path(&manager, "/tickets/1"), GuardOutcome::RedirectToUnauthorized);
        assert_eq!(authorize_path(&manager, "/inventory"), GuardOutcome::Allow);

        let token_only = Session {
            token: Some("tok".into()),
            user: None,
        };
        assert_eq!(authorize_path(&token_only, "/sales/dashboard"), GuardOutcome::RedirectToUnauthorized);
    }

    #[test]
    fn literal_routes_win_over_ticket_id() {
        let rule = resolve("/tickets/createticket/bulkorder").unwrap();
        assert_eq!(rule.pattern, "/tickets/createticket/bulkorder");
        assert_eq!(resolve("/tickets/abc123").unwrap().pattern, "/tickets/:id");
        assert!(resolve("/tickets/").is_none());
        assert_eq!(authorize_path(&signed_in("purchase"), "/tickets/createticket/newproduct"),
            GuardOutcome::RedirectToUnauthorized);
    }

    #[test]
    fn pattern_matching_ignores_query_and_trailing_slash() {
        let rule = rule_for_pattern("/inventory").unwrap();
        assert!(rule.matches("/inventory/"));
        assert!(rule.matches("/inventory?page=2"));
        assert!(!rule.matches("/inventory/addnewproduct"));
    }

    #[test]
    fn ticket_back_link_stays_reachable_for_staff() {
        for role in STAFF {
            let s = signed_in(role.as_str());
            let back = ticket_list_path(&s);
            assert_eq!(back, role.tickets_path());
            assert_eq!(authorize_path(&s, back), GuardOutcome::Allow, "{}", back);
        }
        assert_eq!(ticket_list_path(&Session::default()), "/login");
    }

    #[test]
    fn public_pages_and_landing() {
        assert_eq!(authorize_path(&Session::default(), "/login"), GuardOutcome::Allow);
        assert_eq!(landing_path(&Session::default()), "/login");
        assert_eq!(landing_path(&signed_in("admin")), "/admin/dashboard");
        assert_eq!(landing_path(&signed_in("manager")), "/unauthorized");
    }
}
