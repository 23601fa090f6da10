use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    client.post_public("/auth/login", &request).await
}
