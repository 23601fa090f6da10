use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use leptos::prelude::*;

use super::session::Session;
use super::storage;

/// Session handle provided at the application root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
}

impl SessionContext {
    /// Hydrates synchronously from storage so the first render already sees
    /// the persisted token and user.
    pub fn restore() -> Self {
        Self {
            state: RwSignal::new(storage::load()),
        }
    }

    pub fn session(&self) -> Session {
        self.state.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(Session::is_logged_in)
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(Session::role)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn login(&self, token: String, user: UserInfo) {
        log::info!("signed in as {} ({})", user.display_name(), user.role);
        self.state.update(|s| {
            s.login(token, user);
            storage::save(s);
        });
    }

    pub fn logout(&self) {
        log::info!("signed out");
        self.state.update(Session::logout);
        storage::clear();
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore());
    children()
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
