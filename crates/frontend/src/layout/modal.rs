use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Overlay dialog bound to an `open` flag. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);

    move || {
        if !open.get() {
            return view! { <></> }.into_any();
        }
        let children = children.clone();
        view! {
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.get_value()}</h2>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            {icon("x")}
                        </Button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        }
        .into_any()
    }
}
