use contracts::domain::tickets::{TicketStatus, TicketType};
use contracts::shared::paging::{PageQuery, TICKETS_PAGE_LIMIT};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::table::TicketTable;
use crate::domain::tickets::api;
use crate::domain::tickets::filter::TicketFilter;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{ErrorNotice, Loading};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Select boxes for type and status, bound to raw option values
/// (`""` means any).
#[component]
pub fn TicketFilterBar(
    search: RwSignal<String>,
    ticket_type: RwSignal<String>,
    status: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <SearchInput value=search placeholder="Search by ID, subject, product or creator" />
                <Select value=ticket_type>
                    <option value="">"All types"</option>
                    {TicketType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </Select>
                <Select value=status>
                    <option value="">"All statuses"</option>
                    {TicketStatus::FILTERABLE.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </Select>
            </Flex>
        </div>
    }
}

pub fn filter_from(search: RwSignal<String>, ticket_type: RwSignal<String>, status: RwSignal<String>) -> TicketFilter {
    TicketFilter {
        query: search.get(),
        ticket_type: TicketType::parse(&ticket_type.get()),
        status: TicketStatus::parse(&status.get()),
    }
}

/// Sales ticket list. Server-paged; search and filters act on the loaded
/// page only.
#[component]
pub fn TicketsPage() -> impl IntoView {
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

    view! {
        <div class="page">
            <PageHeader title="Tickets" subtitle="Your product and order requests">
                {TicketType::ALL.into_iter().map(|t| view! {
                    <A href=t.create_path() attr:class="btn btn--primary">
                        {icon("plus")}
                        {format!(" {}", t.label())}
                    </A>
                }).collect_view()}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| tickets.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <TicketFilterBar search=search ticket_type=ticket_type status=status />

            {move || match tickets.state.get() {
                FetchState::Loading => view! { <Loading label="Loading tickets..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(p) => view! {
                    <div class="page__meta">{format!("{} tickets in total", p.total)}</div>
                }.into_any(),
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
