use contracts::domain::products::ProductDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::products::api;
use crate::layout::toast::use_toast;
use crate::shared::api_utils::use_api;
use crate::shared::components::file_drop::{use_upload_list, FileDropZone};
use crate::shared::components::page_header::PageHeader;
use crate::shared::fetch::{use_fetch, FetchState};

const IMAGE_TYPES: &str = "image/*";

#[component]
pub fn AddProductPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();
    let navigate = use_navigate();
    let images = use_upload_list();
    let submitting = RwSignal::new(false);

    let product_name = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let categories = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { api::fetch_categories(&client).await }
        },
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ProductDraft {
            product_name: product_name.get_untracked(),
            sku: sku.get_untracked(),
            category: category.get_untracked(),
            supplier: supplier.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
            description: description.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            toast.error(e.to_string());
            return;
        }
        let files = images.with_untracked(|u| u.files());
        let client = api.get_value();
        let navigate = navigate.clone();
        submitting.set(true);
        spawn_local(async move {
            match api::create_product(&client, &draft, &files).await {
                Ok(()) => {
                    let _ = images.try_update(|u| u.clear());
                    toast.success("Product added");
                    navigate("/inventory", Default::default());
                }
                Err(e) => toast.error(format!("Failed to add product: {e}")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Add New Product" subtitle="Register a product in the catalogue" />
            <form class="form card" on:submit=on_submit>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Product name *"</Label>
                        <Input value=product_name placeholder="e.g. Ceramic travel mug" />
                    </div>
                    <div class="form__group">
                        <Label>"SKU *"</Label>
                        <Input value=sku placeholder="e.g. MUG-01" />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Category"</Label>
                        <Select value=category>
                            <option value="">"Select category"</option>
                            {move || {
                                let options = categories.state.with(|s| match s {
                                    FetchState::Ready(list) => list.clone(),
                                    _ => Vec::new(),
                                });
                                options.into_iter().map(|c| view! {
                                    <option value=c.name.clone()>{c.name.clone()}</option>
                                }).collect_view()
                            }}
                        </Select>
                    </div>
                    <div class="form__group">
                        <Label>"Supplier"</Label>
                        <Input value=supplier placeholder="Supplier name" />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Price"</Label>
                        <Input value=price placeholder="0.00" input_type=InputType::Number />
                    </div>
                    <div class="form__group">
                        <Label>"Stock"</Label>
                        <Input value=stock placeholder="0" input_type=InputType::Number />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Description"</Label>
                    <Textarea value=description placeholder="Short product description" />
                </div>
                <FileDropZone uploads=images title="Product images" accept=IMAGE_TYPES />
                <div class="form__actions">
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Add Product" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
