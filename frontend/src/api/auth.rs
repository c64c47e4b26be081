use reqwest::multipart::{Form, Part};

use super::{
    cache::CacheTag,
    client::ApiClient,
    types::{ApiError, ApiResponse, ImageUpload, LoginRequest, LoginTokens, RegisterPayload},
};
use crate::utils::cookies::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginTokens>, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send_envelope::<LoginTokens>(self.http_client().post(&url).json(&request))
            .await?;
        if response.success {
            if let Some(tokens) = &response.data {
                self.persist_session(tokens);
                self.cached_users().clear();
            }
        }
        Ok(response)
    }

    fn persist_session(&self, tokens: &LoginTokens) {
        let store = self.store();
        store.set(ACCESS_COOKIE_NAME, &tokens.access_token);
        if let Some(refresh) = &tokens.refresh_token {
            store.set(REFRESH_COOKIE_NAME, refresh);
        }
    }

    /// Drops the access token. The refresh token is left for the backend to expire.
    pub fn logout(&self) {
        self.store().remove(ACCESS_COOKIE_NAME);
        self.cached_users().clear();
        log::info!("signed out");
    }

    pub async fn register(
        &self,
        payload: &RegisterPayload,
        image: Option<ImageUpload>,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let data = serde_json::to_string(payload)
            .map_err(|e| ApiError::validation(format!("Invalid registration data: {}", e)))?;
        let mut form = Form::new().text("data", data);
        if let Some(image) = image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)
                .map_err(|e| ApiError::validation(format!("Invalid image type: {}", e)))?;
            form = form.part("file", part);
        }

        let url = self.endpoint("/auth/register").await;
        let response = self
            .send_envelope(self.http_client().post(&url).multipart(form))
            .await?;
        if response.success {
            self.tags().invalidate(CacheTag::Users);
        }
        Ok(response)
    }
}
