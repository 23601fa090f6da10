use contracts::system::users::{CreateUserDto, User};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/admin/users").await
}

pub async fn create_user(client: &ApiClient, dto: &CreateUserDto) -> Result<(), ApiError> {
    dto.validate()?;
    client.post_json("/admin/add-user", dto).await?;
    log::info!("created {} user {}", dto.role.as_str(), dto.email);
    Ok(())
}
