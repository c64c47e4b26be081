use crate::{session::Role, state::session::use_session};
use leptos::*;

const LINK_CLASSES: &str = "flex items-center justify-center rounded-md px-8 py-3 text-base font-medium";

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let claims = session.claims();

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">"RoleDash"</h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-gray-500 sm:text-lg">
                        "Accounts, roles and profiles in one place"
                    </p>
                    <div class="mt-8 flex justify-center gap-3">
                        {move || match claims.get() {
                            Some(claims) => {
                                let greeting = format!("Signed in as {}", claims.name);
                                match claims.role {
                                    Some(role) => view! {
                                        <p class="self-center text-sm text-gray-600">{greeting}</p>
                                        <a
                                            href=role.home_path()
                                            class=format!("{} bg-indigo-600 text-white hover:bg-indigo-700", LINK_CLASSES)
                                        >
                                            {dashboard_label(role)}
                                        </a>
                                    }
                                    .into_view(),
                                    None => view! {
                                        <p class="self-center text-sm text-gray-600">{greeting}</p>
                                    }
                                    .into_view(),
                                }
                            }
                            None => view! {
                                <a
                                    href="/login"
                                    class=format!("{} bg-indigo-600 text-white hover:bg-indigo-700", LINK_CLASSES)
                                >
                                    "Login"
                                </a>
                                <a
                                    href="/register"
                                    class=format!("{} border border-gray-300 bg-white text-gray-900 hover:bg-gray-50", LINK_CLASSES)
                                >
                                    "Register"
                                </a>
                            }
                            .into_view(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn dashboard_label(role: Role) -> String {
    format!("Go to {} Dashboard", role.label())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{SessionContext, SessionState};
    use crate::test_support::helpers::{admin_claims_json, token_for};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signed_out_home_links_to_login_and_register() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::default()));
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/register\""));
    }

    #[test]
    fn signed_in_home_links_to_role_dashboard() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::from_token(Some(
                &token_for(admin_claims_json()),
            ))));
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/admin/dashboard\""));
        assert!(html.contains("Signed in as Admin User"));
        assert!(!html.contains("href=\"/login\""));
    }
}
