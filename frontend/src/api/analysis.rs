use super::{
    client::ApiClient,
    types::{Analysis, ApiError, ApiResponse},
};

impl ApiClient {
    /// Admin head counts for the dashboard stat cards.
    pub async fn get_analysis(&self) -> Result<ApiResponse<Analysis>, ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.endpoint("/analysis").await;
        self.send_envelope(self.http_client().get(&url).headers(headers))
            .await
    }
}
