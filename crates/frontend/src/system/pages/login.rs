use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::routes::access::landing_path;
use crate::shared::api_utils::use_api;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    if session.is_logged_in() {
        return view! { <Redirect path=landing_path(&session.session()) /> }.into_any();
    }
    let api_client = StoredValue::new(use_api());
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Please enter your email and password.".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);
        let client = api_client.get_value();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&client, email_val, password_val).await {
                Ok(response) => {
                    session.login(response.token, response.user);
                    let target = landing_path(&session.session());
                    navigate(target, Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    let _ = error_message.try_set(Some(format!("Login failed: {e}")));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sales Tracker"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form class="form" on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="you@company.com"
                            disabled=is_loading
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input value=password input_type=InputType::Password disabled=is_loading />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
    .into_any()
}
