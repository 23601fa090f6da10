use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Loading(#[prop(optional, into)] label: String) -> impl IntoView {
    let label = if label.is_empty() { "Loading...".to_string() } else { label };
    view! {
        <Flex gap=FlexGap::Small class="page-state page-state--loading">
            <Spinner />
            <span>{label}</span>
        </Flex>
    }
}

#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="alert alert--error">{message}</div> }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="page-state page-state--empty">{message}</div> }
}
