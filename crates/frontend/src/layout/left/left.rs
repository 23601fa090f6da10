use crate::layout::global_context::use_layout;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let layout = use_layout();
    let is_open = move || layout.left_open.get();

    view! {
        <div data-zone="left" class="left app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
