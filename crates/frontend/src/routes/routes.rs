use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::dashboards::{AdminDashboard, PurchaseDashboard, SalesDashboard};
use crate::domain::products::ui::create::AddProductPage;
use crate::domain::products::ui::inventory::InventoryPage;
use crate::domain::suppliers::ui::create::AddSupplierPage;
use crate::domain::suppliers::ui::list::SuppliersPage;
use crate::domain::tickets::ui::admin_overview::AdminTicketsPage;
use crate::domain::tickets::ui::create::{BulkOrderTicketPage, ExistingProductTicketPage, NewProductTicketPage};
use crate::domain::tickets::ui::details::TicketDetailsPage;
use crate::domain::tickets::ui::list::TicketsPage;
use crate::routes::access::landing_path;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::Protected;
use crate::system::pages::login::LoginPage;
use crate::system::pages::unauthorized::UnauthorizedPage;
use crate::system::users::ui::list::UserManagementPage;

/// `/` sends the user to their dashboard, or to the login page.
#[component]
fn Landing() -> impl IntoView {
    let session = use_session();
    view! { <Redirect path=landing_path(&session.session()) /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box login-box--notice">
                <h1>"Page not found"</h1>
                <A href="/" attr:class="btn btn--primary">"Go home"</A>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Landing />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/unauthorized") view=UnauthorizedPage />

                <Route path=path!("/sales/dashboard") view=|| view! {
                    <Protected pattern="/sales/dashboard"><SalesDashboard /></Protected>
                } />
                <Route path=path!("/ticketspage") view=|| view! {
                    <Protected pattern="/ticketspage"><TicketsPage /></Protected>
                } />
                <Route path=path!("/tickets/createticket/newproduct") view=|| view! {
                    <Protected pattern="/tickets/createticket/newproduct"><NewProductTicketPage /></Protected>
                } />
                <Route path=path!("/tickets/createticket/existingproduct") view=|| view! {
                    <Protected pattern="/tickets/createticket/existingproduct"><ExistingProductTicketPage /></Protected>
                } />
                <Route path=path!("/tickets/createticket/bulkorder") view=|| view! {
                    <Protected pattern="/tickets/createticket/bulkorder"><BulkOrderTicketPage /></Protected>
                } />
                <Route path=path!("/tickets/:id") view=|| view! {
                    <Protected pattern="/tickets/:id"><TicketDetailsPage /></Protected>
                } />

                <Route path=path!("/inventory") view=|| view! {
                    <Protected pattern="/inventory"><InventoryPage /></Protected>
                } />
                <Route path=path!("/inventory/addnewproduct") view=|| view! {
                    <Protected pattern="/inventory/addnewproduct"><AddProductPage /></Protected>
                } />

                <Route path=path!("/purchase/dashboard") view=|| view! {
                    <Protected pattern="/purchase/dashboard"><PurchaseDashboard /></Protected>
                } />
                <Route path=path!("/purchase/suppliers") view=|| view! {
                    <Protected pattern="/purchase/suppliers"><SuppliersPage /></Protected>
                } />
                <Route path=path!("/purchase/suppliers/new") view=|| view! {
                    <Protected pattern="/purchase/suppliers/new"><AddSupplierPage /></Protected>
                } />

                <Route path=path!("/admin/dashboard") view=|| view! {
                    <Protected pattern="/admin/dashboard"><AdminDashboard /></Protected>
                } />
                <Route path=path!("/admin/users") view=|| view! {
                    <Protected pattern="/admin/users"><UserManagementPage /></Protected>
                } />
                <Route path=path!("/admin/tickets") view=|| view! {
                    <Protected pattern="/admin/tickets"><AdminTicketsPage /></Protected>
                } />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::access::{rule_for_pattern, ROUTE_RULES};

    // Every pattern wired above must have an access rule, or the guard
    // fails closed and the page is unreachable.
    const WIRED: &[&str] = &[
        "/sales/dashboard",
        "/ticketspage",
        "/tickets/createticket/newproduct",
        "/tickets/createticket/existingproduct",
        "/tickets/createticket/bulkorder",
        "/tickets/:id",
        "/inventory",
        "/inventory/addnewproduct",
        "/purchase/dashboard",
        "/purchase/suppliers",
        "/purchase/suppliers/new",
        "/admin/dashboard",
        "/admin/users",
        "/admin/tickets",
    ];

    #[test]
    fn every_protected_route_has_a_rule() {
        for pattern in WIRED {
            assert!(rule_for_pattern(pattern).is_some(), "{pattern}");
        }
        assert_eq!(WIRED.len(), ROUTE_RULES.len());
    }
}
