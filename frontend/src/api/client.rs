use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use super::{
    cache::{CacheTag, CacheTags, TaggedEntry},
    types::*,
};
use crate::{
    config,
    utils::cookies::{self, SessionStore},
};

/// Typed client for the user directory backend.
///
/// Cheap to clone; clones share the session store and cache tags.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    store: Rc<dyn SessionStore>,
    tags: CacheTags,
    users: TaggedEntry<ApiResponse<PagedUsers>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            store: cookies::default_store(),
            tags: CacheTags::default(),
            users: TaggedEntry::new(CacheTag::Users),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_store(mut self, store: Rc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.store)
    }

    pub fn tags(&self) -> &CacheTags {
        &self.tags
    }

    pub(super) fn cached_users(&self) -> &TaggedEntry<ApiResponse<PagedUsers>> {
        &self.users
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// The backend expects the raw token, without a `Bearer` scheme.
    pub(super) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .store
            .access_token()
            .ok_or_else(ApiError::unauthenticated)?;
        let value = HeaderValue::from_str(&token)
            .map_err(|_| ApiError::validation("Invalid token format"))?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build().map_err(|e| {
            log::error!("failed to build request: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        log::debug!("{} {}", request.method(), request.url());

        if let Some(mocked) = intercept(&request) {
            return mocked.map_err(|e| {
                log::error!("request to {} failed: {}", request.url(), e);
                e
            });
        }

        let url = request.url().clone();
        self.client.execute(request).await.map_err(|e| {
            log::error!("request to {} failed: {}", url, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    /// Decodes the `{success, message, data}` envelope whatever the status code.
    pub(super) async fn parse_envelope<T: DeserializeOwned>(
        response: Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("failed to read response body: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            log::error!("undecodable response ({}): {}", status, e);
            ApiError::invalid_response(format!("Failed to parse response: {}", e))
                .with_details(serde_json::json!({ "status": status.as_u16() }))
        })
    }

    pub(super) async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(request).await?;
        let envelope = Self::parse_envelope::<T>(response).await?;
        if !envelope.success {
            log::warn!(
                "backend rejected request: {}",
                envelope.message.as_deref().unwrap_or("no message")
            );
        }
        Ok(envelope)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use self::mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use self::mock_registry::mock_response as intercept;

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn intercept(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}
