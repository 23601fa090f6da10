use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;
use crate::layout::Shell;
use crate::routes::access::{authorize, rule_for_pattern, GuardOutcome};

/// Guard chain for one route: signed in, then role, then layout chrome.
///
/// `pattern` must be a key of the access table; an unregistered pattern is
/// treated as forbidden.
#[component]
pub fn Protected(pattern: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let rule = rule_for_pattern(pattern);
    if rule.is_none() {
        log::warn!("no access rule registered for {}", pattern);
    }

    let outcome = Memo::new(move |_| match rule {
        Some(rule) => authorize(&session.session(), rule),
        None => GuardOutcome::RedirectToUnauthorized,
    });

    move || match outcome.get() {
        GuardOutcome::Allow => {
            let children = children.clone();
            view! { <Shell>{children()}</Shell> }.into_any()
        }
        denied => {
            let target = denied.redirect_path().unwrap_or_default();
            log::debug!("guard on {} redirects to {}", pattern, target);
            view! { <Redirect path=target /> }.into_any()
        }
    }
}
