//! The three ticket creation forms.
//!
//! Each form keeps one signal per field and assembles its draft on submit.
//! On success the uploads and fields are cleared and the user lands back on
//! the ticket list. On failure everything stays as typed.

use contracts::domain::tickets::drafts::{BulkOrderDraft, ExistingProductDraft, NewProductDraft, TicketDraft};
use contracts::domain::tickets::{Priority, TicketType};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::tickets::api;
use crate::layout::toast::{use_toast, ToastService};
use crate::shared::api_utils::{use_api, ApiClient};
use crate::shared::components::file_drop::{use_upload_list, FileDropZone, UploadList};
use crate::shared::components::page_header::PageHeader;

const TICKETS_PATH: &str = "/ticketspage";

fn field(label: &'static str, value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input value=value placeholder=placeholder />
        </div>
    }
}

fn typed_field(
    label: &'static str,
    value: RwSignal<String>,
    placeholder: &'static str,
    input_type: InputType,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input value=value placeholder=placeholder input_type=input_type />
        </div>
    }
}

fn date_field(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

fn text_area(label: &'static str, value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Textarea value=value placeholder=placeholder />
        </div>
    }
}

fn priority_select(value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>"Priority"</Label>
            <Select value=value>
                <option value="">"Select priority"</option>
                {Priority::ALL.into_iter().map(|p| view! {
                    <option value=p.as_str()>{p.label()}</option>
                }).collect_view()}
            </Select>
        </div>
    }
}

fn form_actions(submitting: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="form__actions">
            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Ticket" }}
            </button>
        </div>
    }
}

/// Validates and posts a draft with the pending documents. `on_success`
/// runs after the uploads are cleared.
fn submit_ticket<D>(
    client: ApiClient,
    draft: D,
    uploads: UploadList,
    submitting: RwSignal<bool>,
    toast: ToastService,
    on_success: impl FnOnce() + 'static,
) where
    D: TicketDraft + 'static,
{
    if submitting.get_untracked() {
        return;
    }
    if let Err(e) = draft.validate() {
        toast.error(e.to_string());
        return;
    }
    let docs = uploads.with_untracked(|u| u.files());
    submitting.set(true);
    spawn_local(async move {
        match api::create_ticket(&client, &draft, &docs).await {
            Ok(()) => {
                let _ = uploads.try_update(|u| u.clear());
                toast.success(format!("{} ticket created", D::TICKET_TYPE.label()));
                on_success();
            }
            Err(e) => {
                log::warn!("ticket submission failed: {e}");
                toast.error(format!("Failed to create ticket: {e}"));
            }
        }
        let _ = submitting.try_set(false);
    });
}

fn clear_all(fields: &[RwSignal<String>]) {
    for f in fields {
        f.set(String::new());
    }
}

#[component]
fn CreateTicketFrame(ticket_type: TicketType, children: Children) -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <PageHeader title=format!("New {} Ticket", ticket_type.label()) subtitle=ticket_type.blurb().to_string() />
            {children()}
        </div>
    }
}

#[component]
pub fn NewProductTicketPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let navigate = use_navigate();
    let uploads = use_upload_list();
    let submitting = RwSignal::new(false);

    let product_name = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let expected_new_price = RwSignal::new(String::new());
    let preferred_supplier = RwSignal::new(String::new());
    let total_expected_price = RwSignal::new(String::new());
    let expected_delivery_date = RwSignal::new(String::new());
    let assigned_to = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = NewProductDraft {
            product_name: product_name.get_untracked(),
            subject: subject.get_untracked(),
            description: description.get_untracked(),
            expected_new_price: expected_new_price.get_untracked(),
            preferred_supplier: preferred_supplier.get_untracked(),
            total_expected_price: total_expected_price.get_untracked(),
            expected_delivery_date: expected_delivery_date.get_untracked(),
            assigned_to: assigned_to.get_untracked(),
            priority: Priority::parse(&priority.get_untracked()),
        };
        let navigate = navigate.clone();
        submit_ticket(api.get_value(), draft, uploads, submitting, toast, move || {
            clear_all(&[
                product_name,
                subject,
                description,
                expected_new_price,
                preferred_supplier,
                total_expected_price,
                expected_delivery_date,
                assigned_to,
                priority,
            ]);
            navigate(TICKETS_PATH, Default::default());
        });
    };

    view! {
        <CreateTicketFrame ticket_type=TicketType::NewProduct>
            <form class="form card" on:submit=on_submit>
                {field("Product name *", product_name, "e.g. Ceramic travel mug")}
                {field("Subject *", subject, "Short summary of the request")}
                {text_area("Description", description, "What the customer needs and why")}
                <div class="form__row">
                    {typed_field("Expected price", expected_new_price, "0.00", InputType::Number)}
                    {typed_field("Total expected price", total_expected_price, "0.00", InputType::Number)}
                </div>
                <div class="form__row">
                    {field("Preferred supplier", preferred_supplier, "Supplier name")}
                    {date_field("Expected delivery date", expected_delivery_date)}
                </div>
                <div class="form__row">
                    {field("Assign to", assigned_to, "Purchase team member")}
                    {priority_select(priority)}
                </div>
                <FileDropZone uploads=uploads />
                {form_actions(submitting)}
            </form>
        </CreateTicketFrame>
    }
}

#[component]
pub fn ExistingProductTicketPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let navigate = use_navigate();
    let uploads = use_upload_list();
    let submitting = RwSignal::new(false);

    let product_id = RwSignal::new(String::new());
    let current_product_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let reason_for_update = RwSignal::new(String::new());
    let fields_to_modify = RwSignal::new(String::new());
    let expected_new_price = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ExistingProductDraft {
            product_id: product_id.get_untracked(),
            current_product_name: current_product_name.get_untracked(),
            quantity: quantity.get_untracked(),
            reason_for_update: reason_for_update.get_untracked(),
            fields_to_modify: fields_to_modify.get_untracked(),
            expected_new_price: expected_new_price.get_untracked(),
            priority: Priority::parse(&priority.get_untracked()),
        };
        let navigate = navigate.clone();
        submit_ticket(api.get_value(), draft, uploads, submitting, toast, move || {
            clear_all(&[
                product_id,
                current_product_name,
                quantity,
                reason_for_update,
                fields_to_modify,
                expected_new_price,
                priority,
            ]);
            navigate(TICKETS_PATH, Default::default());
        });
    };

    view! {
        <CreateTicketFrame ticket_type=TicketType::ExistingProduct>
            <form class="form card" on:submit=on_submit>
                <div class="form__row">
                    {field("Product ID / SKU *", product_id, "e.g. SKU-1042")}
                    {field("Current product name", current_product_name, "As listed in inventory")}
                </div>
                {text_area("Reason for update *", reason_for_update, "What should change and why")}
                {field("Fields to modify", fields_to_modify, "e.g. price, packaging")}
                <div class="form__row">
                    {typed_field("Quantity", quantity, "0", InputType::Number)}
                    {typed_field("Expected new price", expected_new_price, "0.00", InputType::Number)}
                </div>
                {priority_select(priority)}
                <FileDropZone uploads=uploads />
                {form_actions(submitting)}
            </form>
        </CreateTicketFrame>
    }
}

#[component]
pub fn BulkOrderTicketPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let navigate = use_navigate();
    let uploads = use_upload_list();
    let submitting = RwSignal::new(false);

    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let expected_unit_price = RwSignal::new(String::new());
    let total_expected_price = RwSignal::new(String::new());
    let preferred_supplier = RwSignal::new(String::new());
    let delivery_date = RwSignal::new(String::new());
    let reason_for_bulk_order = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());

    // Prefill the total whenever quantity and unit price both parse.
    Effect::new(move |_| {
        let probe = BulkOrderDraft {
            quantity: quantity.get(),
            expected_unit_price: expected_unit_price.get(),
            ..Default::default()
        };
        if let Some(total) = probe.computed_total() {
            total_expected_price.set(format!("{total:.2}"));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = BulkOrderDraft {
            product_id: product_id.get_untracked(),
            quantity: quantity.get_untracked(),
            expected_unit_price: expected_unit_price.get_untracked(),
            total_expected_price: total_expected_price.get_untracked(),
            preferred_supplier: preferred_supplier.get_untracked(),
            delivery_date: delivery_date.get_untracked(),
            reason_for_bulk_order: reason_for_bulk_order.get_untracked(),
            priority: Priority::parse(&priority.get_untracked()),
        };
        let navigate = navigate.clone();
        submit_ticket(api.get_value(), draft, uploads, submitting, toast, move || {
            clear_all(&[
                product_id,
                quantity,
                expected_unit_price,
                total_expected_price,
                preferred_supplier,
                delivery_date,
                reason_for_bulk_order,
                priority,
            ]);
            navigate(TICKETS_PATH, Default::default());
        });
    };

    view! {
        <CreateTicketFrame ticket_type=TicketType::BulkOrder>
            <form class="form card" on:submit=on_submit>
                {field("Product name or SKU *", product_id, "e.g. SKU-1042")}
                <div class="form__row">
                    {typed_field("Quantity *", quantity, "0", InputType::Number)}
                    {typed_field("Expected unit price", expected_unit_price, "0.00", InputType::Number)}
                    {typed_field("Total expected price", total_expected_price, "0.00", InputType::Number)}
                </div>
                <div class="form__row">
                    {field("Preferred supplier", preferred_supplier, "Supplier name")}
                    {date_field("Delivery date", delivery_date)}
                </div>
                {text_area("Reason for bulk order", reason_for_bulk_order, "Customer, event, or pricing context")}
                {priority_select(priority)}
                <FileDropZone uploads=uploads />
                {form_actions(submitting)}
            </form>
        </CreateTicketFrame>
    }
}
