use crate::api::{ApiClient, ApiError, ApiResponse, ImageUpload, RegisterPayload};
use serde_json::Value;

pub async fn register(
    api: &ApiClient,
    payload: &RegisterPayload,
    avatar: Option<ImageUpload>,
) -> Result<ApiResponse<Value>, ApiError> {
    api.register(payload, avatar).await
}
