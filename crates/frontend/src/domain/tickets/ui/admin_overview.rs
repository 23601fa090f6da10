use contracts::domain::tickets::StatusCounts;
use contracts::domain::tickets::TicketStatus;
use contracts::shared::paging::{PageQuery, TICKETS_PAGE_LIMIT};
use leptos::prelude::*;
use thaw::*;

use super::list::{filter_from, TicketFilterBar};
use super::table::TicketTable;
use crate::domain::tickets::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{ErrorNotice, Loading};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;

/// Every ticket in the system, read-only, with per-status totals for the
/// loaded page.
#[component]
pub fn AdminTicketsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let page = RwSignal::new(1usize);
    let search = RwSignal::new(String::new());
    let ticket_type = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let tickets = use_fetch(
        move || page.get(),
        move |page| {
            let client = api.get_value();
            async move { api::fetch_page(&client, PageQuery::new(page, TICKETS_PAGE_LIMIT)).await }
        },
    );

    let total_pages = Signal::derive(move || {
        tickets.state.with(|s| s.ready().map(|p| p.total_pages).unwrap_or(1))
    });
    let visible = Memo::new(move |_| {
        let filter = filter_from(search, ticket_type, status);
        tickets
            .state
            .with(|s| s.ready().map(|p| filter.apply(&p.data)).unwrap_or_default())
    });
    let counts = Memo::new(move |_| StatusCounts::tally(&visible.get()));

    view! {
        <div class="page">
            <PageHeader title="All Tickets" subtitle="Requests across every sales representative">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| tickets.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <TicketFilterBar search=search ticket_type=ticket_type status=status />

            <div class="chip-row">
                {TicketStatus::FILTERABLE.into_iter().map(|s| view! {
                    <span class="chip">
                        {s.label()}": "{move || counts.get().get(s)}
                    </span>
                }).collect_view()}
            </div>

            {move || match tickets.state.get() {
                FetchState::Loading => view! { <Loading label="Loading tickets..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(_) => ().into_any(),
            }}

            <TicketTable rows=visible />

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| page.set(p))
            />
        </div>
    }
}
