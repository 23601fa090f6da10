use crate::layout::global_context::LayoutContext;
use crate::layout::toast::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("api base: {}", config.api_base);
    provide_context(config);
    provide_context(LayoutContext::new());
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
