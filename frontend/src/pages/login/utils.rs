use crate::api::{ApiError, ApiResponse, LoginRequest, LoginTokens};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

/// The message to show for a finished login attempt, if it failed.
pub fn failure_of(result: &Result<ApiResponse<LoginTokens>, ApiError>) -> Option<ApiError> {
    match result {
        Ok(response) if response.success => None,
        Ok(response) => Some(ApiError::unknown(response.message_or("Login failed"))),
        Err(error) => Some(error.clone()),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_trims_email() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set(" ada@example.com ".into());
            form.password.set("secret".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.email, "ada@example.com");
            assert_eq!(request.password, "secret");
        });
    }
}
