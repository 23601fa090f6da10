use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use super::nav::{is_active, nav_items_for};
use crate::routes::access::LOGIN_PATH;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let items = move || nav_items_for(session.role());

    let logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__role">
                {move || session.role().map(|r| format!("{} workspace", r.label())).unwrap_or_default()}
            </div>
            <nav class="app-sidebar__nav">
                {move || items().into_iter().map(|item| {
                    view! {
                        <A href=item.path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || location.pathname.with(|p| is_active(&item, p))
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <button class="app-sidebar__item app-sidebar__logout" on:click=logout>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </div>
                </button>
            </div>
        </div>
    }
}
