use contracts::domain::tickets::{StatusCounts, TicketStatus};
use contracts::shared::paging::{PageQuery, PURCHASE_QUEUE_LIMIT};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::purchase::queue::{queue_rows, response_cards, status_or_due};
use crate::domain::tickets::api;
use crate::domain::tickets::filter::QueueTab;
use crate::shared::api_utils::use_api;
use crate::shared::components::badge::{status_class, PriorityBadge};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{EmptyState, ErrorNotice, Loading};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, Tone};
use crate::shared::date_utils::now_local;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::auth::context::use_session;

#[component]
pub fn PurchaseDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();
    let page = RwSignal::new(1usize);
    let search = RwSignal::new(String::new());
    let tab = RwSignal::new(QueueTab::All);

    let viewer = Memo::new(move |_| session.user().map(|u| u.name).unwrap_or_default());

    let tickets = use_fetch(
        move || page.get(),
        move |page| {
            let client = api.get_value();
            async move { api::fetch_page(&client, PageQuery::new(page, PURCHASE_QUEUE_LIMIT)).await }
        },
    );

    let total_pages = Signal::derive(move || {
        tickets.state.with(|s| s.ready().map(|p| p.total_pages).unwrap_or(1))
    });
    let counts = Memo::new(move |_| {
        tickets.state.with(|s| s.ready().map(|p| StatusCounts::tally(&p.data)))
    });
    let cards = Memo::new(move |_| {
        let name = viewer.get();
        tickets
            .state
            .with(|s| s.ready().map(|p| response_cards(&p.data, &name, now_local())).unwrap_or_default())
    });
    let rows = Memo::new(move |_| {
        let name = viewer.get();
        let query = search.get();
        let active = tab.get();
        tickets
            .state
            .with(|s| s.ready().map(|p| queue_rows(&p.data, active, &name, &query)).unwrap_or_default())
    });

    let count_of = move |status: TicketStatus| Signal::derive(move || counts.get().map(|c| c.get(status)));

    view! {
        <div class="page">
            <PageHeader title="Purchase Dashboard" subtitle="Price and supply requests from the sales team">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| tickets.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="In queue"
                    icon_name="ticket"
                    value=Signal::derive(move || tickets.state.with(|s| s.ready().map(|p| p.total)))
                />
                <StatCard label="Pending" icon_name="clock" value=count_of(TicketStatus::Pending) tone=Tone::Warning />
                <StatCard label="Approved" icon_name="check" value=count_of(TicketStatus::Approved) tone=Tone::Info />
                <StatCard label="Completed" icon_name="check" value=count_of(TicketStatus::Completed) tone=Tone::Success />
            </div>

            <section class="card">
                <h2 class="card__title">"Requires Your Response"</h2>
                {move || {
                    let list = cards.get();
                    if list.is_empty() {
                        return view! { <EmptyState message="Nothing assigned to you on this page" /> }.into_any();
                    }
                    view! {
                        <div class="response-cards">
                            {list.into_iter().map(|card| {
                                let href = format!("/tickets/{}", card.ticket.id);
                                view! {
                                    <div class="response-card">
                                        {card.urgency.map(|u| view! {
                                            <div class=u.severity.class()>{icon("alert")}" "{u.text}</div>
                                        })}
                                        <div class="response-card__title">{card.ticket.headline().to_string()}</div>
                                        <div class="response-card__meta">
                                            {card.ticket.ticket_type.label()}
                                            " "
                                            <PriorityBadge priority=card.ticket.priority />
                                        </div>
                                        <A href=href attr:class="btn btn--small">"Respond"</A>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>

            <section class="card">
                <div class="queue-toolbar">
                    <SearchInput value=search placeholder="Search" />
                    <div class="tabs">
                        {QueueTab::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if tab.get() == t { "tabs__item tabs__item--active" } else { "tabs__item" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                {move || match tickets.state.get() {
                    FetchState::Loading => view! { <Loading label="Loading tickets..." /> }.into_any(),
                    FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                    FetchState::Ready(_) if rows.with(Vec::is_empty) => {
                        view! { <EmptyState message="No tickets found" /> }.into_any()
                    }
                    FetchState::Ready(_) => {
                        let now = now_local();
                        view! {
                            <div class="table-wrapper">
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Ticket ID"</TableHeaderCell>
                                            <TableHeaderCell>"Product Name"</TableHeaderCell>
                                            <TableHeaderCell>"Type"</TableHeaderCell>
                                            <TableHeaderCell>"Status / Due Date"</TableHeaderCell>
                                            <TableHeaderCell>"Actions"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {rows.get().into_iter().map(|t| {
                                            let href = format!("/tickets/{}", t.id);
                                            let kind = match t.priority {
                                                Some(p) => format!("{} - {}", t.ticket_type.label(), p.label()),
                                                None => t.ticket_type.label().to_string(),
                                            };
                                            let short_id = format!("#{}", t.short_id());
                                            let headline = t.headline().to_string();
                                            let status_cls = status_class(t.status);
                                            let status_text = status_or_due(&t, now);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>{short_id}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{headline}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{kind}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <span class=status_cls>{status_text}</span>
                                                    </TableCell>
                                                    <TableCell>
                                                        <A href=href>"View Details"</A>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                        .into_any()
                    }
                }}

                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    on_page_change=Callback::new(move |p| page.set(p))
                />
            </section>
        </div>
    }
}
