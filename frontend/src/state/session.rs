use crate::{
    api::{ApiClient, ApiError, ApiResponse, LoginRequest, LoginTokens, User},
    session::{self, Role, SessionClaims, SessionError},
    utils::cookies::SessionStore,
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub claims: Option<SessionClaims>,
    /// Backend profile, set by the first authenticated fetch.
    pub profile: Option<User>,
    /// A token was present but could not be decoded.
    pub error: Option<SessionError>,
}

impl SessionState {
    pub fn from_token(token: Option<&str>) -> Self {
        match session::resolve(token) {
            Ok(claims) => Self {
                claims,
                ..Self::default()
            },
            Err(error) => {
                log::error!("malformed session token: {}", error);
                Self {
                    error: Some(error),
                    ..Self::default()
                }
            }
        }
    }

    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self::from_token(store.access_token().as_deref())
    }
}

/// Who is signed in, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self::new(SessionState::from_store(store))
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn claims(&self) -> Signal<Option<SessionClaims>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.claims.clone()))
    }

    pub fn role(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.claims.as_ref().and_then(|c| c.role)))
    }

    pub fn profile(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.profile.clone()))
    }

    pub fn error(&self) -> Signal<Option<SessionError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn establish(&self, user: User) {
        self.state.update(|s| s.profile = Some(user));
    }

    pub fn refresh_from_store(&self, store: &dyn SessionStore) {
        self.state.set(SessionState::from_store(store));
    }

    pub fn teardown(&self) {
        log::info!("session cleared");
        self.state.set(SessionState::default());
    }

    /// Tears the session down when `error` means the token is gone.
    /// Returns `true` when it did.
    pub fn handle_error(&self, error: &ApiError) -> bool {
        if error.is_unauthenticated() {
            self.teardown();
            true
        } else {
            false
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = SessionContext::from_store(api.store().as_ref());
    provide_context(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        SessionContext::from_store(api.store().as_ref())
    })
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    session: SessionContext,
) -> Result<ApiResponse<LoginTokens>, ApiError> {
    let response = api.login(request).await?;
    if response.success {
        session.refresh_from_store(api.store().as_ref());
    }
    Ok(response)
}

pub fn logout(api: &ApiClient, session: SessionContext) {
    api.logout();
    session.teardown();
}

pub fn use_login_action() -> Action<LoginRequest, Result<ApiResponse<LoginTokens>, ApiError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, session).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_claims_json, token_for};
    use crate::test_support::ssr::with_runtime;
    use crate::utils::cookies::{MemoryStore, ACCESS_COOKIE_NAME};

    #[test]
    fn state_from_missing_token_is_signed_out() {
        let state = SessionState::from_token(None);
        assert!(state.claims.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn state_from_malformed_token_records_error() {
        let state = SessionState::from_token(Some("garbage"));
        assert!(state.claims.is_none());
        assert_eq!(state.error, Some(SessionError::MissingPayload));
    }

    #[test]
    fn teardown_clears_claims_and_profile() {
        with_runtime(|| {
            let store = MemoryStore::with_access_token(token_for(admin_claims_json()));
            let ctx = SessionContext::from_store(&store);
            assert_eq!(ctx.role().get_untracked(), Some(Role::Admin));

            ctx.teardown();
            assert!(ctx.claims().get_untracked().is_none());
            assert!(ctx.profile().get_untracked().is_none());
        });
    }

    #[test]
    fn unauthenticated_errors_tear_down_the_session() {
        with_runtime(|| {
            let store = MemoryStore::with_access_token(token_for(admin_claims_json()));
            let ctx = SessionContext::from_store(&store);

            assert!(!ctx.handle_error(&ApiError::request_failed("offline")));
            assert!(ctx.claims().get_untracked().is_some());

            assert!(ctx.handle_error(&ApiError::unauthenticated()));
            assert!(ctx.claims().get_untracked().is_none());
        });
    }

    #[test]
    fn refresh_picks_up_a_new_token() {
        with_runtime(|| {
            let store = MemoryStore::new();
            let ctx = SessionContext::from_store(&store);
            assert!(ctx.claims().get_untracked().is_none());

            store.set(ACCESS_COOKIE_NAME, &token_for(admin_claims_json()));
            ctx.refresh_from_store(&store);
            assert_eq!(
                ctx.claims().get_untracked().map(|c| c.email),
                Some("admin@example.com".to_string())
            );
        });
    }
}
