use contracts::domain::tickets::{StatusCounts, TicketStatus, TicketType};
use contracts::shared::paging::{PageQuery, TICKETS_PAGE_LIMIT};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::tickets::api;
use crate::domain::tickets::ui::table::TicketTable;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{ErrorNotice, Loading};
use crate::shared::components::stat_card::{StatCard, Tone};
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

const RECENT_ROWS: usize = 5;

/// Counts are taken from the first page of tickets.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();

    let tickets = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { api::fetch_page(&client, PageQuery::new(1, TICKETS_PAGE_LIMIT)).await }
        },
    );

    let counts = Memo::new(move |_| {
        tickets.state.with(|s| s.ready().map(|p| StatusCounts::tally(&p.data)))
    });
    let count_of = move |status: TicketStatus| Signal::derive(move || counts.get().map(|c| c.get(status)));
    let recent = Signal::derive(move || {
        tickets.state.with(|s| {
            s.ready()
                .map(|p| p.data.iter().take(RECENT_ROWS).cloned().collect())
                .unwrap_or_default()
        })
    });
    let greeting = Signal::derive(move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}", u.display_name()))
    });

    view! {
        <div class="page">
            <PageHeader title="Sales Dashboard" subtitle=greeting>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| tickets.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total tickets"
                    icon_name="ticket"
                    value=Signal::derive(move || tickets.state.with(|s| s.ready().map(|p| p.total)))
                />
                <StatCard label="Pending" icon_name="clock" value=count_of(TicketStatus::Pending) tone=Tone::Warning />
                <StatCard label="Approved" icon_name="check" value=count_of(TicketStatus::Approved) tone=Tone::Info />
                <StatCard label="Rejected" icon_name="x" value=count_of(TicketStatus::Rejected) tone=Tone::Error />
                <StatCard label="Completed" icon_name="check" value=count_of(TicketStatus::Completed) tone=Tone::Success />
            </div>

            <section class="card">
                <h2 class="card__title">"Create a ticket"</h2>
                <div class="action-grid">
                    {TicketType::ALL.into_iter().map(|t| view! {
                        <A href=t.create_path() attr:class="action-tile">
                            <div class="action-tile__icon">{icon("plus")}</div>
                            <div class="action-tile__title">{t.label()}</div>
                            <div class="action-tile__text">{t.blurb()}</div>
                        </A>
                    }).collect_view()}
                </div>
            </section>

            <section class="card">
                <div class="card__header">
                    <h2 class="card__title">"Recent tickets"</h2>
                    <A href="/ticketspage">"View all"</A>
                </div>
                {move || match tickets.state.get() {
                    FetchState::Loading => view! { <Loading label="Loading tickets..." /> }.into_any(),
                    FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                    FetchState::Ready(_) => view! { <TicketTable rows=recent /> }.into_any(),
                }}
            </section>
        </div>
    }
}
