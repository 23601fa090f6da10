use contracts::domain::tickets::{StatusCounts, TicketStatus};
use contracts::shared::paging::{PageQuery, TICKETS_PAGE_LIMIT};
use contracts::system::roles::Role;
use contracts::system::users::RoleCounts;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::tickets::api as tickets_api;
use crate::layout::modal::Modal;
use crate::layout::toast::use_toast;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::ErrorNotice;
use crate::shared::components::stat_card::{StatCard, Tone};
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::system::users::api as users_api;
use crate::system::users::ui::details::AddUserForm;

fn role_tone(role: Role) -> Tone {
    match role {
        Role::Sales => Tone::Info,
        Role::Purchase => Tone::Success,
        Role::Admin => Tone::Warning,
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let show_create = RwSignal::new(false);

    let users = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { users_api::fetch_users(&client).await }
        },
    );
    let tickets = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { tickets_api::fetch_page(&client, PageQuery::new(1, TICKETS_PAGE_LIMIT)).await }
        },
    );

    let roles = Memo::new(move |_| users.state.with(|s| s.ready().map(|u| RoleCounts::tally(u))));
    let statuses = Memo::new(move |_| {
        tickets.state.with(|s| s.ready().map(|p| StatusCounts::tally(&p.data)))
    });

    view! {
        <div class="page">
            <PageHeader title="Admin Dashboard" subtitle="Users and ticket activity">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " Add User"
                </Button>
            </PageHeader>

            <section class="card">
                <div class="card__header">
                    <h2 class="card__title">"Users"</h2>
                    <A href="/admin/users">"Manage users"</A>
                </div>
                {move || match users.state.get() {
                    FetchState::Failed(message) => Some(view! { <ErrorNotice message=message /> }),
                    _ => None,
                }}
                <div class="stat-grid">
                    <StatCard
                        label="Total users"
                        icon_name="users"
                        value=Signal::derive(move || roles.get().map(|r| r.total()))
                    />
                    {Role::ALL.into_iter().map(|role| view! {
                        <StatCard
                            label=role.label()
                            icon_name="user"
                            value=Signal::derive(move || roles.get().map(|r| r.get(role)))
                            tone=role_tone(role)
                        />
                    }).collect_view()}
                </div>
            </section>

            <section class="card">
                <div class="card__header">
                    <h2 class="card__title">"Tickets"</h2>
                    <A href="/admin/tickets">"View all tickets"</A>
                </div>
                {move || match tickets.state.get() {
                    FetchState::Failed(message) => Some(view! { <ErrorNotice message=message /> }),
                    _ => None,
                }}
                <div class="stat-grid">
                    <StatCard
                        label="Total tickets"
                        icon_name="ticket"
                        value=Signal::derive(move || tickets.state.with(|s| s.ready().map(|p| p.total)))
                    />
                    {[
                        (TicketStatus::Pending, Tone::Warning),
                        (TicketStatus::Approved, Tone::Info),
                        (TicketStatus::Rejected, Tone::Error),
                        (TicketStatus::Completed, Tone::Success),
                    ].into_iter().map(|(status, tone)| view! {
                        <StatCard
                            label=status.label()
                            icon_name="ticket"
                            value=Signal::derive(move || statuses.get().map(|c| c.get(status)))
                            tone=tone
                        />
                    }).collect_view()}
                </div>
            </section>

            <Modal open=show_create title="Add User">
                <AddUserForm
                    on_created=Callback::new(move |()| {
                        show_create.set(false);
                        toast.success("User created");
                        users.reload();
                    })
                    on_cancel=Callback::new(move |()| show_create.set(false))
                />
            </Modal>
        </div>
    }
}
