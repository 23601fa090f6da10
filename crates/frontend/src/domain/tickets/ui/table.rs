use contracts::domain::tickets::Ticket;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::badge::{PriorityBadge, StatusBadge};
use crate::shared::components::page_states::EmptyState;
use crate::shared::date_utils::format_date_opt;

/// Ticket rows; clicking a row opens its details page.
#[component]
pub fn TicketTable(#[prop(into)] rows: Signal<Vec<Ticket>>) -> impl IntoView {
    let navigate = use_navigate();

    move || {
        let tickets = rows.get();
        if tickets.is_empty() {
            return view! { <EmptyState message="No tickets found" /> }.into_any();
        }
        let navigate = navigate.clone();
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Ticket ID"</TableHeaderCell>
                            <TableHeaderCell>"Subject / Product"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Priority"</TableHeaderCell>
                            <TableHeaderCell>"Created By"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {tickets.into_iter().map(|ticket| {
                            let href = format!("/tickets/{}", ticket.id);
                            let navigate = navigate.clone();
                            let short_id = format!("#{}", ticket.short_id());
                            let headline = ticket.headline().to_string();
                            let type_label = ticket.ticket_type.label();
                            let created_by = ticket.created_by.clone().unwrap_or_else(|| "N/A".to_string());
                            let created = format_date_opt(ticket.created_at.as_deref());
                            view! {
                                <TableRow class="table__row--clickable" on:click=move |_| navigate(&href, Default::default())>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="ticket-id">{short_id}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{headline}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{type_label}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <StatusBadge status=ticket.status />
                                    </TableCell>
                                    <TableCell>
                                        <PriorityBadge priority=ticket.priority />
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {created_by}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{created}</TableCellLayout>
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
}
