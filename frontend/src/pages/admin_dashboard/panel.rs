use super::{components::StatCards, view_model::use_admin_dashboard_view_model};
use crate::components::{
    layout::{DashboardLayout, ErrorMessage, LoadingSpinner},
    profile_details::ProfileDetails,
    profile_edit::{ProfileEditModal, Reconcile},
};
use leptos::*;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let overview = vm.overview;
    let profile = Signal::derive(move || {
        overview
            .get()
            .and_then(|result| result.ok())
            .and_then(|overview| overview.profile)
    });

    view! {
        <DashboardLayout title="Admin Dashboard" current_path="/admin/dashboard">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || overview.get().map(|result| match result {
                    Ok(overview) => view! {
                        <div class="space-y-6">
                            <StatCards analysis=overview.analysis />
                            {overview.profile.map(|user| view! { <ProfileDetails user=user /> })}
                        </div>
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.error /> }.into_view(),
                })}
            </Suspense>
            <div class="mt-6 flex justify-end">
                <ProfileEditModal user=profile reconcile=Reconcile::Reload(vm.reload) />
            </div>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{SessionContext, SessionState};
    use crate::test_support::helpers::{admin_claims_json, token_for};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_dashboard_renders_frame_while_loading() {
        let html = render_to_string(move || {
            provide_context(SessionContext::new(SessionState::from_token(Some(
                &token_for(admin_claims_json()),
            ))));
            view! { <AdminDashboardPanel /> }
        });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Manage User"));
        assert!(html.contains("Edit Profile"));
    }
}
