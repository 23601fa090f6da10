use contracts::domain::suppliers::SupplierDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::suppliers::api;
use crate::layout::toast::use_toast;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;

#[component]
pub fn AddSupplierPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let navigate = use_navigate();
    let submitting = RwSignal::new(false);

    let company_name = RwSignal::new(String::new());
    let contact_person = RwSignal::new(String::new());
    let gst = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let website_url = RwSignal::new(String::new());
    let products_services = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = SupplierDraft {
            company_name: company_name.get_untracked(),
            contact_person: contact_person.get_untracked(),
            gst: gst.get_untracked(),
            address: address.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone_number.get_untracked(),
            website_url: website_url.get_untracked(),
            products_services: products_services.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            toast.error(e.to_string());
            return;
        }
        let client = api.get_value();
        let navigate = navigate.clone();
        submitting.set(true);
        spawn_local(async move {
            match api::create_supplier(&client, &draft).await {
                Ok(()) => {
                    toast.success(format!("Supplier {} added", draft.company_name.trim()));
                    navigate("/purchase/suppliers", Default::default());
                }
                Err(e) => toast.error(format!("Failed to add supplier: {e}")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Add Supplier" subtitle="Register a new supplier" />
            <form class="form card" on:submit=on_submit>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Company name *"</Label>
                        <Input value=company_name placeholder="e.g. Acme Ceramics" />
                    </div>
                    <div class="form__group">
                        <Label>"Contact person *"</Label>
                        <Input value=contact_person placeholder="Full name" />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email placeholder="sales@supplier.com" input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <Label>"Phone number"</Label>
                        <Input value=phone_number placeholder="+1 555 0100" />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"GST"</Label>
                        <Input value=gst placeholder="Tax registration number" />
                    </div>
                    <div class="form__group">
                        <Label>"Website"</Label>
                        <Input value=website_url placeholder="https://" />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Address"</Label>
                    <Textarea value=address placeholder="Street, city, postcode" />
                </div>
                <div class="form__group">
                    <Label>"Products / services"</Label>
                    <Textarea value=products_services placeholder="What this supplier provides" />
                </div>
                <div class="form__actions">
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Add Supplier" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
