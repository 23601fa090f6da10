use contracts::domain::tickets::drafts::ResponseDraft;
use contracts::domain::tickets::{Ticket, TicketAffordances, TicketResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::tickets::api;
use crate::layout::toast::use_toast;
use crate::routes::access::ticket_list_path;
use crate::shared::api_utils::use_api;
use crate::shared::components::badge::{PriorityBadge, StatusBadge};
use crate::shared::components::file_drop::{use_upload_list, FileDropZone};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{EmptyState, ErrorNotice, Loading};
use crate::shared::date_utils::{format_date_opt, format_datetime};
use crate::shared::fetch::{use_fetch, Fetch, FetchState};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "N/A".to_string());
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}

fn attachment_links(paths: Vec<String>) -> impl IntoView {
    let config = crate::shared::config::use_config();
    view! {
        <ul class="attachment-list">
            {paths.into_iter().map(|path| {
                let name = path.rsplit('/').next().unwrap_or(&path).to_string();
                let href = if path.starts_with("http") { path.clone() } else { config.url(&path) };
                view! {
                    <li>
                        <a href=href target="_blank" rel="noopener">{icon("file")}" "{name}</a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

#[component]
fn TicketOverview(ticket: Ticket) -> impl IntoView {
    let docs = ticket.supporting_docs.clone();
    view! {
        <div class="details-grid">
            <section class="card">
                <h3 class="card__title">"Request"</h3>
                {detail_row("Type", Some(ticket.ticket_type.label().to_string()))}
                {detail_row("Subject", ticket.subject.clone())}
                {detail_row("Product", ticket.product_name.clone())}
                {detail_row("Product ID", ticket.product_id.clone())}
                {detail_row("Quantity", ticket.quantity.clone())}
                {detail_row("Description", ticket.description.clone())}
            </section>
            <section class="card">
                <h3 class="card__title">"Pricing & supply"</h3>
                {detail_row("Expected new price", ticket.expected_new_price.clone())}
                {detail_row("Expected unit price", ticket.expected_unit_price.clone())}
                {detail_row("Total expected price", ticket.total_expected_price.clone())}
                {detail_row("Preferred supplier", ticket.preferred_supplier.clone())}
                {detail_row("Expected delivery", Some(format_date_opt(ticket.expected_delivery_date.as_deref())))}
            </section>
            <section class="card">
                <h3 class="card__title">"Metadata"</h3>
                <div class="detail-row">
                    <span class="detail-row__label">"Priority"</span>
                    <PriorityBadge priority=ticket.priority />
                </div>
                {detail_row("Created by", ticket.created_by.clone())}
                {detail_row("Assigned to", ticket.assigned_to.clone())}
                {detail_row("Created", Some(format_date_opt(ticket.created_at.as_deref())))}
                {detail_row("Updated", Some(format_date_opt(ticket.updated_at.as_deref())))}
            </section>
            <section class="card">
                <h3 class="card__title">"Supporting documents"</h3>
                {if docs.is_empty() {
                    view! { <EmptyState message="No documents attached" /> }.into_any()
                } else {
                    attachment_links(docs).into_any()
                }}
            </section>
        </div>
    }
}

#[component]
fn ResponseHistory(responses: Fetch<Vec<TicketResponse>>) -> impl IntoView {
    move || match responses.state.get() {
        FetchState::Loading => view! { <Loading label="Loading responses..." /> }.into_any(),
        FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
        FetchState::Ready(list) if list.is_empty() => {
            view! { <EmptyState message="No responses yet" /> }.into_any()
        }
        FetchState::Ready(list) => view! {
            <ul class="response-list">
                {list.into_iter().map(|r| view! {
                    <li class="response">
                        <div class="response__header">
                            <strong>{r.title.clone()}</strong>
                            <span class="response__meta">
                                {r.responded_by.clone().unwrap_or_default()}
                                " "
                                {r.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                            </span>
                        </div>
                        <p class="response__body">{r.description.clone()}</p>
                        {(!r.attachments.is_empty()).then(|| attachment_links(r.attachments.clone()))}
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn ResponseForm(ticket_id: Signal<String>, responses: Fetch<Vec<TicketResponse>>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let uploads = use_upload_list();
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let draft = ResponseDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        let files = uploads.with_untracked(|u| u.files());
        let client = api.get_value();
        let id = ticket_id.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            match api::submit_response(&client, &id, &draft, &files).await {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    uploads.update(|u| u.clear());
                    toast.success("Response submitted");
                    responses.reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <section class="card response-form">
            <h3 class="card__title">"Add a response"</h3>
            <div class="form__group">
                <Label>"Title"</Label>
                <Input value=title placeholder="e.g. Supplier quote received" />
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description placeholder="Details of the response" />
            </div>
            <FileDropZone uploads=uploads title="Attachments" />
            <Flex justify=FlexJustify::End>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=submit
                >
                    {icon("send")}
                    {move || if submitting.get() { " Submitting..." } else { " Submit response" }}
                </Button>
            </Flex>
        </section>
    }
}

/// Ticket details with the close action and the response thread.
#[component]
pub fn TicketDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let ticket_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let api = StoredValue::new(use_api());
    let session = use_session();
    let toast = use_toast();
    let closing = RwSignal::new(false);

    let ticket = use_fetch(
        move || ticket_id.get(),
        move |id| {
            let client = api.get_value();
            async move { api::fetch_ticket(&client, &id).await }
        },
    );
    let responses = use_fetch(
        move || ticket_id.get(),
        move |id| {
            let client = api.get_value();
            async move { api::fetch_responses(&client, &id).await }
        },
    );

    let status = Signal::derive(move || ticket.state.with(|s| s.ready().map(|t| t.status)));
    let affordances = Memo::new(move |_| TicketAffordances::for_viewer(session.role(), status.get()));
    let back_path = Signal::derive(move || ticket_list_path(&session.session()).to_string());

    let close = move |_| {
        if closing.get_untracked() {
            return;
        }
        let Some(current) = status.get_untracked() else {
            return;
        };
        let client = api.get_value();
        let id = ticket_id.get_untracked();
        closing.set(true);
        spawn_local(async move {
            match api::close_ticket(&client, &id, current).await {
                Ok(next) => {
                    ticket.update_ready(|t| t.status = next);
                    toast.success("Ticket closed");
                }
                Err(e) => toast.error(format!("Failed to close ticket: {e}")),
            }
            let _ = closing.try_set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || format!("Ticket #{}", ticket_id.get()))
                subtitle=Signal::derive(move || {
                    ticket.state.with(|s| s.ready().map(|t| t.headline().to_string()))
                })
            >
                <A href=move || back_path.get() attr:class="btn btn--subtle">
                    {icon("arrow-left")}
                    " Back"
                </A>
                {move || status.get().map(|s| view! { <StatusBadge status=s /> })}
                <Show when=move || affordances.get().can_close>
                    <Button appearance=ButtonAppearance::Primary disabled=closing on_click=close>
                        {icon("check")}
                        {move || if closing.get() { " Closing..." } else { " Close Ticket" }}
                    </Button>
                </Show>
            </PageHeader>

            {move || match ticket.state.get() {
                FetchState::Loading => view! { <Loading label="Loading ticket..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(t) => view! { <TicketOverview ticket=t /> }.into_any(),
            }}

            <section class="card">
                <h3 class="card__title">"Responses"</h3>
                <ResponseHistory responses=responses />
            </section>

            <Show when=move || affordances.get().can_respond>
                <ResponseForm ticket_id=ticket_id responses=responses />
            </Show>
        </div>
    }
}
