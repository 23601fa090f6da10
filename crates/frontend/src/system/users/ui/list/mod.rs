mod state;

use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::layout::modal::Modal;
use crate::layout::toast::use_toast;
use crate::shared::api_utils::use_api;
use crate::shared::components::badge::RoleBadge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{EmptyState, ErrorNotice, Loading};
use crate::shared::date_utils::format_date_opt;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::users::api;
use crate::system::users::ui::details::AddUserForm;
use state::{SortField, UsersListState};

fn status_class(user: &User) -> &'static str {
    match user.status_label() {
        "active" => "badge badge--success",
        "inactive" | "disabled" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let state = RwSignal::new(UsersListState::default());
    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let users = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { api::fetch_users(&client).await }
        },
    );

    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| s.search_query = query);
    });

    let rows = Memo::new(move |_| {
        let view_state = state.get();
        users.state.with(|s| s.ready().map(|u| view_state.apply(u)).unwrap_or_default())
    });

    let sort_header = move |label: &'static str, field: SortField| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" on:click=move |_| state.update(|s| s.toggle_sort(field))>
                    {label}
                    <span>{move || state.with(|s| s.indicator(field))}</span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="User Management" subtitle="Accounts and roles">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " Add User"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| users.reload()>
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search by name, email or role" />
            </div>

            {move || match users.state.get() {
                FetchState::Loading => view! { <Loading label="Loading users..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(_) if rows.with(Vec::is_empty) => {
                    view! { <EmptyState message="No users found" /> }.into_any()
                }
                FetchState::Ready(_) => view! {
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {sort_header("Name", SortField::Name)}
                                    {sort_header("Email", SortField::Email)}
                                    {sort_header("Role", SortField::Role)}
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    {sort_header("Created", SortField::Created)}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || rows.get()
                                    key=|u| u.id.clone()
                                    children=|user| {
                                        let name = user.name.clone();
                                        let email = user.email.clone();
                                        let role = user.role();
                                        let status_cls = status_class(&user);
                                        let status_text = user.status_label().to_string();
                                        let created = format_date_opt(user.created_at.as_deref());
                                        view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RoleBadge role=role />
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_cls>{status_text}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                }
                .into_any(),
            }}

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
