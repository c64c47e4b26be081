use crate::{
    components::{error::SessionErrorPanel, layout::LoadingSpinner},
    guard::{applies_to, evaluate, GuardDecision},
    state::session::{use_session, SessionState},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Render,
    Redirect(&'static str),
    Fatal(String),
}

/// Client-side counterpart of the server guard, re-run on every session change.
pub fn gate_decision(path: &str, state: &SessionState) -> GateState {
    if let Some(error) = &state.error {
        return GateState::Fatal(error.to_string());
    }
    if !applies_to(path) {
        return GateState::Render;
    }
    match evaluate(path, state.claims.as_ref()) {
        GuardDecision::Allow => GateState::Render,
        decision => GateState::Redirect(decision.target().unwrap_or("/")),
    }
}

#[component]
pub fn RouteGuard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let gate = create_memo(move |_| state.with(|state| gate_decision(path, state)));

    create_effect(move |_| {
        if let GateState::Redirect(target) = gate.get() {
            log::info!("guard redirect {} -> {}", path, target);
            navigation::redirect(target);
        }
    });

    view! {
        {move || match gate.get() {
            GateState::Render => children().into_view(),
            GateState::Redirect(_) => view! { <LoadingSpinner /> }.into_view(),
            GateState::Fatal(message) => view! { <SessionErrorPanel message=message /> }.into_view(),
        }}
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RouteGuard;
    use crate::state::session::{SessionContext, SessionState};
    use crate::test_support::helpers::{admin_claims_json, token_for, user_claims_json};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_token(token: Option<String>) {
        provide_context(SessionContext::new(SessionState::from_token(token.as_deref())));
    }

    #[test]
    fn admin_reaches_admin_pages() {
        let html = render_to_string(move || {
            provide_token(Some(token_for(admin_claims_json())));
            view! {
                <RouteGuard path="/admin/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn user_is_kept_out_of_admin_pages() {
        let html = render_to_string(move || {
            provide_token(Some(token_for(user_claims_json())));
            view! {
                <RouteGuard path="/admin/manage_user">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn anonymous_visitor_is_kept_out_of_user_pages() {
        let html = render_to_string(move || {
            provide_token(None);
            view! {
                <RouteGuard path="/user/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn malformed_token_renders_session_error() {
        let html = render_to_string(move || {
            provide_token(Some("not-a-token".into()));
            view! {
                <RouteGuard path="/user/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(html.contains("Session error"));
    }
}
