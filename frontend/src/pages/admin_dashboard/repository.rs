use crate::api::{Analysis, ApiClient, ApiError, ApiResponse, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub analysis: Analysis,
    pub profile: Option<User>,
}

fn require_success<T>(response: ApiResponse<T>, fallback: &str) -> Result<Option<T>, ApiError> {
    if response.success {
        Ok(response.data)
    } else {
        Err(ApiError::unknown(response.message_or(fallback)))
    }
}

/// Stats and the caller's own profile, fetched side by side.
pub async fn load_overview(api: &ApiClient) -> Result<AdminOverview, ApiError> {
    let (analysis, profile) = futures::join!(api.get_analysis(), api.get_current_user_profile());
    let analysis = require_success(analysis?, "Failed to load statistics")?;
    let profile = require_success(profile?, "Failed to load profile")?;
    Ok(AdminOverview {
        analysis: analysis.unwrap_or_default(),
        profile,
    })
}
