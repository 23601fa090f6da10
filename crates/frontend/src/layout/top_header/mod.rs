//! Top bar: sidebar toggle, product title and the signed-in user.

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let session = use_session();

    let is_sidebar_visible = move || layout.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Sales Tracker"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session.user()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                    {move || session.role().map(|r| view! {
                        <span class="badge badge--neutral">{r.label()}</span>
                    })}
                </div>
            </div>
        </div>
    }
}
