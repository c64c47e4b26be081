use super::view_model::use_user_dashboard_view_model;
use crate::{
    api::User,
    components::{
        layout::{DashboardLayout, EmptyState, ErrorMessage, LoadingSpinner},
        profile_details::ProfileDetails,
        profile_edit::{ProfileEditModal, Reconcile},
    },
};
use leptos::*;

#[component]
pub fn UserProfileSection(record: RwSignal<Option<User>>) -> impl IntoView {
    let has_record = create_memo(move |_| record.with(Option::is_some));

    view! {
        <Show
            when=move || has_record.get()
            fallback=|| view! { <EmptyState message="No user data found" /> }
        >
            <div class="space-y-4">
                {move || record.get().map(|user| view! { <ProfileDetails user=user /> })}
                <div class="flex justify-end">
                    <ProfileEditModal user=record.into() reconcile=Reconcile::Merge(record) />
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn UserDashboardPanel() -> impl IntoView {
    let vm = use_user_dashboard_view_model();
    let profile = vm.profile;
    let record = vm.record;

    view! {
        <DashboardLayout title="User Dashboard" current_path="/user/dashboard">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || profile.get().map(|result| match result {
                    Ok(_) => view! { <UserProfileSection record=record /> }.into_view(),
                    Err(error) => view! { <ErrorMessage message=error.error /> }.into_view(),
                })}
            </Suspense>
        </DashboardLayout>
    }
}
