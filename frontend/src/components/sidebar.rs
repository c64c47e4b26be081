use crate::{
    api::ApiClient,
    guard::matches_prefix,
    session::Role,
    state::session::{self, use_session},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        label: "Admin Dashboard",
        href: "/admin/dashboard",
    },
    NavItem {
        label: "Manage User",
        href: "/admin/manage_user",
    },
];

const USER_NAV: &[NavItem] = &[
    NavItem {
        label: "User Dashboard",
        href: "/user/dashboard",
    },
    NavItem {
        label: "Back Home",
        href: "/",
    },
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::User => USER_NAV,
    }
}

/// Home only matches itself; other items also match their sub-paths.
pub fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        matches_prefix(current, href)
    }
}

#[component]
pub fn Sidebar(#[prop(into)] current_path: MaybeSignal<String>) -> impl IntoView {
    let session = use_session();
    let role = session.role();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let on_logout = move |_| {
        session::logout(&api, session);
        navigation::redirect("/");
    };

    view! {
        <aside class="w-64 shrink-0 border-r border-gray-200 bg-white min-h-screen flex flex-col">
            <div class="px-6 py-5 text-lg font-semibold text-gray-900">"roledash"</div>
            <nav class="flex-1 space-y-1 px-3">
                {move || {
                    let current = current_path.get();
                    role.get()
                        .map(nav_items)
                        .unwrap_or_default()
                        .iter()
                        .map(|item| {
                            let class = if is_active(&current, item.href) {
                                "block rounded-md px-3 py-2 text-sm font-medium bg-indigo-50 text-indigo-700"
                            } else {
                                "block rounded-md px-3 py-2 text-sm font-medium text-gray-600 hover:bg-gray-50 hover:text-gray-900"
                            };
                            view! { <a href=item.href class=class>{item.label}</a> }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="p-3">
                <button
                    type="button"
                    class="w-full rounded-md px-3 py-2 text-left text-sm font-medium text-red-600 hover:bg-red-50"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{SessionContext, SessionState};
    use crate::test_support::helpers::{admin_claims_json, token_for};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_sidebar_highlights_current_page() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::from_token(Some(
                &token_for(admin_claims_json()),
            ))));
            view! { <Sidebar current_path="/admin/manage_user".to_string() /> }
        });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Manage User"));
        assert!(html.contains("bg-indigo-50"));
        assert!(html.contains("Logout"));
        assert!(!html.contains("User Dashboard"));
    }

    #[test]
    fn signed_out_sidebar_has_no_links() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::default()));
            view! { <Sidebar current_path="/".to_string() /> }
        });
        assert!(!html.contains("Dashboard"));
    }
}
