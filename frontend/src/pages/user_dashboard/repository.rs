use crate::api::{ApiClient, ApiError, User};

/// The caller's own record; `None` when the backend has nothing to return.
pub async fn fetch_profile(api: &ApiClient) -> Result<Option<User>, ApiError> {
    let response = api.get_current_user_profile().await?;
    if !response.success {
        log::warn!("{}", response.message_or("profile request rejected"));
        return Ok(None);
    }
    Ok(response.data)
}
