pub mod global_context;
pub mod left;
pub mod modal;
pub mod toast;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Chrome around every signed-in page.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <div class="app-main">
                    <div data-zone="center" class="app-content">
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}
