use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::access::{landing_path, LOGIN_PATH};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let home = move || {
        let target = if session.role().is_some() {
            landing_path(&session.session())
        } else {
            LOGIN_PATH
        };
        target.to_string()
    };

    view! {
        <div class="login-container">
            <div class="login-box login-box--notice">
                <div class="notice__icon">{icon("alert")}</div>
                <h1>"Access denied"</h1>
                <p>"Your account does not have permission to view this page."</p>
                <A href=home attr:class="btn btn--primary">
                    {move || if session.role().is_some() { "Go to your dashboard" } else { "Sign in" }}
                </A>
            </div>
        </div>
    }
}
