use super::utils::{self, LoginFormState};
use crate::api::{ApiError, ApiResponse, LoginRequest, LoginTokens};
use crate::state::session;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<ApiResponse<LoginTokens>, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(error) => self.error.set(Some(error)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = session::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match utils::failure_of(&result) {
                None => {
                    error.set(None);
                    form.password.set(String::new());
                    let target =
                        navigation::post_auth_target(navigation::query_param("redirectPath"));
                    navigation::redirect(&target);
                }
                Some(failure) => error.set(Some(failure)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get_untracked().is_none());
            assert!(vm.form.email.get_untracked().is_empty());
        });
    }

    #[test]
    fn submit_with_blank_fields_sets_inline_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            assert_eq!(
                vm.error.get_untracked().map(|e| e.error),
                Some("Email is required".to_string())
            );
        });
    }
}
