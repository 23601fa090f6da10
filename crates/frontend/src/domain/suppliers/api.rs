use contracts::domain::suppliers::{SupplierDraft, SupplierPage};
use contracts::shared::paging::PageQuery;

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn fetch_page(client: &ApiClient, query: PageQuery) -> Result<SupplierPage, ApiError> {
    client.get_with_query("/suppliers", &query).await
}

pub async fn create_supplier(client: &ApiClient, draft: &SupplierDraft) -> Result<(), ApiError> {
    draft.validate()?;
    client.post_json("/suppliers", draft).await?;
    log::info!("created supplier {}", draft.company_name.trim());
    Ok(())
}
