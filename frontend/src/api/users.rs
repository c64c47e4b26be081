use super::{
    cache::CacheTag,
    client::ApiClient,
    types::{ApiError, ApiResponse, PagedUsers, UpdateUserPayload, User, UserListBody},
};

impl ApiClient {
    /// `GET /user`, read under the `users` tag. A successful listing is reused
    /// until a write invalidates the tag.
    pub async fn list_users(&self) -> Result<ApiResponse<PagedUsers>, ApiError> {
        let headers = self.get_auth_headers()?;
        if let Some(cached) = self.cached_users().get(self.tags()) {
            log::debug!("serving user list from cache");
            return Ok(cached);
        }
        let url = self.endpoint("/user").await;
        let response = self
            .send_envelope::<UserListBody>(self.http_client().get(&url).headers(headers))
            .await?
            .map(PagedUsers::from);
        if response.success {
            self.cached_users().put(self.tags(), response.clone());
        }
        Ok(response)
    }

    pub async fn get_current_user_profile(&self) -> Result<ApiResponse<User>, ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.endpoint("/user/get-single").await;
        self.send_envelope(self.http_client().get(&url).headers(headers))
            .await
    }

    pub async fn update_profile(
        &self,
        payload: &UpdateUserPayload,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.endpoint("/user/update").await;
        let response = self
            .send_envelope(self.http_client().put(&url).headers(headers).json(payload))
            .await?;
        if response.success {
            self.tags().invalidate(CacheTag::Users);
        }
        Ok(response)
    }

    pub async fn block_user(&self, id: &str) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        self.set_blocked(id, true).await
    }

    pub async fn unblock_user(&self, id: &str) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        self.set_blocked(id, false).await
    }

    async fn set_blocked(
        &self,
        id: &str,
        blocked: bool,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let headers = self.get_auth_headers()?;
        let action = if blocked { "block" } else { "un-block" };
        let encoded = percent_encoding::utf8_percent_encode(id, percent_encoding::NON_ALPHANUMERIC);
        let url = self
            .endpoint(&format!("/user/{}/{}", action, encoded))
            .await;
        let response = self
            .send_envelope(self.http_client().post(&url).headers(headers))
            .await?;
        if response.success {
            self.tags().invalidate(CacheTag::Users);
        }
        Ok(response)
    }
}
