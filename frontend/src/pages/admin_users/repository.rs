use crate::{
    api::{ApiClient, ApiError, ApiResponse, UpdateUserPayload, User},
    session::Role,
};
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone)]
pub struct ManageUsersRepository {
    client: Rc<ApiClient>,
}

impl Default for ManageUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ManageUsersRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.client.list_users().await?;
        if !response.success {
            return Err(ApiError::unknown(response.message_or("Failed to load users")));
        }
        Ok(response.data.map(|page| page.items).unwrap_or_default())
    }

    pub async fn change_role(&self, id: &str, role: Role) -> Result<ApiResponse<Value>, ApiError> {
        self.client
            .update_profile(&UpdateUserPayload::role_change(id, role))
            .await
    }

    pub async fn set_blocked(&self, id: &str, blocked: bool) -> Result<ApiResponse<Value>, ApiError> {
        if blocked {
            self.client.block_user(id).await
        } else {
            self.client.unblock_user(id).await
        }
    }
}
