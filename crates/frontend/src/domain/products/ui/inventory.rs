use contracts::domain::products::Product;
use contracts::shared::paging::{page_count, page_slice, INVENTORY_PAGE_SIZE};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::products::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_states::{EmptyState, ErrorNotice, Loading};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date_opt;
use crate::shared::fetch::{use_fetch, FetchState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};

fn price_text(product: &Product) -> String {
    match product.price_value() {
        Some(v) => format!("${v:.2}"),
        None => "N/A".to_string(),
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let config = use_config();
    let image = product.cover_image().map(|path| {
        if path.starts_with("http") {
            path.to_string()
        } else {
            config.url(path)
        }
    });
    let name = product.display_name().to_string();

    view! {
        <div class="product-card">
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=name.clone() /> }.into_any(),
                    None => view! { <div class="product-card__placeholder">{icon("package")}</div> }.into_any(),
                }}
            </div>
            <div class="product-card__body">
                <div class="product-card__title">{name}</div>
                <div class="product-card__meta">
                    {product.sku.clone().map(|sku| view! { <span class="badge badge--neutral">{sku}</span> })}
                    {product.category.clone().map(|c| view! { <span class="product-card__category">{c}</span> })}
                </div>
                <div class="product-card__row">
                    <span class="product-card__price">{price_text(&product)}</span>
                    <span class="product-card__stock">
                        {format!("Stock: {}", product.stock.clone().unwrap_or_else(|| "0".to_string()))}
                    </span>
                </div>
                <div class="product-card__date">
                    {format!("Updated {}", format_date_opt(product.last_touched()))}
                </div>
            </div>
        </div>
    }
}

/// Product catalogue. Everything is fetched once and paged in the browser,
/// so search spans the whole catalogue.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);

    let products = use_fetch(
        || (),
        move |_| {
            let client = api.get_value();
            async move { api::fetch_products(&client).await }
        },
    );

    let matching = Memo::new(move |_| {
        let query = search.get();
        products
            .state
            .with(|s| s.ready().map(|items| filter_list(items, &query)).unwrap_or_default())
    });

    // A new query starts from the first page.
    Effect::new(move |_| {
        search.track();
        page.set(1);
    });

    let total_pages = Signal::derive(move || matching.with(|m| page_count(m.len(), INVENTORY_PAGE_SIZE)));
    let visible = Memo::new(move |_| {
        matching.with(|m| page_slice(m, page.get(), INVENTORY_PAGE_SIZE).to_vec())
    });

    view! {
        <div class="page">
            <PageHeader title="Inventory" subtitle="Browse the product catalogue">
                <A href="/inventory/addnewproduct" attr:class="btn btn--primary">
                    {icon("plus")}
                    " Add Product"
                </A>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| products.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Search by name, SKU or category" />
                <span class="filter-panel__count">
                    {move || format!("{} products", matching.with(Vec::len))}
                </span>
            </div>

            {move || match products.state.get() {
                FetchState::Loading => view! { <Loading label="Loading products..." /> }.into_any(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                FetchState::Ready(_) if matching.with(Vec::is_empty) => {
                    view! { <EmptyState message="No products found" /> }.into_any()
                }
                FetchState::Ready(_) => view! {
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|p| p.id.clone()
                            children=|product| view! { <ProductCard product=product /> }
                        />
                    </div>
                }
                .into_any(),
            }}

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| page.set(p))
            />
        </div>
    }
}
