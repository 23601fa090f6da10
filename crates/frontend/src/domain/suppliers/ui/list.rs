use contracts::domain::suppliers::Supplier;
use contracts::shared::paging::{PageQuery, SUPPLIERS_PAGE_LIMIT};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::suppliers::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{EmptyState, ErrorNotice, Loading};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};

fn or_dash(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "-".to_string())
}

#[component]
fn SupplierRows(rows: Vec<Supplier>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Company"</TableHeaderCell>
                        <TableHeaderCell>"Contact"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Phone"</TableHeaderCell>
                        <TableHeaderCell>"GST"</TableHeaderCell>
                        <TableHeaderCell>"Products / Services"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows.into_iter().map(|s| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    {match s.website_url.clone().filter(|u| !u.is_empty()) {
                                        Some(url) => view! {
                                            <a href=url target="_blank" rel="noopener">{s.company_name.clone()}</a>
                                        }.into_any(),
                                        None => s.company_name.clone().into_any(),
                                    }}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout truncate=true>{or_dash(&s.contact_person)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout truncate=true>{or_dash(&s.email)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{or_dash(&s.phone_number)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{or_dash(&s.gst)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout truncate=true>{or_dash(&s.products_services)}</TableCellLayout></TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

/// Server-paged supplier directory; search narrows the loaded page.
#[component]
pub fn SuppliersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let page = RwSignal::new(1usize);
    let search = RwSignal::new(String::new());

    let suppliers = use_fetch(
        move || page.get(),
        move |page| {
            let client = api.get_value();
            async move { api::fetch_page(&client, PageQuery::new(page, SUPPLIERS_PAGE_LIMIT)).await }
        },
    );

    let total_pages = Signal::derive(move || {
        suppliers.state.with(|s| s.ready().map(|p| p.total_pages.max(1)).unwrap_or(1))
    });

    view! {
        <div class="page">
            <PageHeader title="Suppliers" subtitle="Companies the purchase team sources from">
                <A href="/purchase/suppliers/new" attr:class="btn btn--primary">
                    {icon("plus")}
                    " Add Supplier"
                </A>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search by company, contact, email or phone" />
            </div>

            {move || match suppliers.state.get() {
                FetchState::Loading => view! { <Loading label="Loading suppliers..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(p) => {
                    let rows = filter_list(&p.suppliers, &search.get());
                    if rows.is_empty() {
                        view! { <EmptyState message="No suppliers found" /> }.into_any()
                    } else {
                        view! { <SupplierRows rows=rows /> }.into_any()
                    }
                }
            }}

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| page.set(p))
            />
        </div>
    }
}
