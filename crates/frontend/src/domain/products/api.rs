use contracts::domain::products::{Category, Product, ProductDraft, PRODUCT_IMAGES_FIELD};
use contracts::shared::list_payload::ListPayload;
use web_sys::File;

use crate::shared::api_utils::{multipart, ApiClient, ApiError};

pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    let payload: ListPayload<Product> = client.get("/products").await?;
    Ok(payload.into_vec())
}

pub async fn fetch_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let payload: ListPayload<Category> = client.get("/categories").await?;
    Ok(payload.into_vec())
}

pub async fn create_product(client: &ApiClient, draft: &ProductDraft, images: &[File]) -> Result<(), ApiError> {
    draft.validate()?;
    let form = multipart(&draft.form_fields(), PRODUCT_IMAGES_FIELD, images)?;
    client.post_form("/products", form).await?;
    log::info!("created product {}", draft.sku.trim());
    Ok(())
}
