use crate::components::sidebar::Sidebar;
use leptos::*;

#[component]
pub fn DashboardLayout(
    #[prop(into)] title: String,
    current_path: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-50">
            <Sidebar current_path=current_path.to_string() />
            <main class="flex-1 px-6 py-8 lg:px-10">
                <h1 class="mb-6 text-2xl font-semibold text-gray-900">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

/// Centered card used by the sign-in and sign-up pages.
#[component]
pub fn AuthLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4 py-12">
            <div class="w-full max-w-md space-y-6 rounded-lg bg-white p-8 shadow">
                <h1 class="text-center text-2xl font-bold text-gray-900">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-dashed border-gray-300 bg-white p-8 text-center text-sm text-gray-500">
            {message}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{SessionContext, SessionState};
    use crate::test_support::helpers::{token_for, user_claims_json};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_layout_renders_sidebar_title_and_children() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::from_token(Some(
                &token_for(user_claims_json()),
            ))));
            view! {
                <DashboardLayout title="User Dashboard" current_path="/user/dashboard">
                    <div>"child"</div>
                </DashboardLayout>
            }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Back Home"));
        assert!(html.contains("User Dashboard"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <EmptyState message="No users found" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("No users found"));
    }
}
