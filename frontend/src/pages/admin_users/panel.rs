use super::{components::UsersTable, utils::user_count_label, view_model::use_manage_users_view_model};
use crate::{
    components::layout::{DashboardLayout, ErrorMessage, LoadingSpinner},
    session::Role,
};
use leptos::*;

#[component]
pub fn ManageUsersPanel() -> impl IntoView {
    let vm = use_manage_users_view_model();
    let users = vm.users;
    let updates = vm.updates;
    let users_resource = vm.users_resource;
    let role_action = vm.role_action;
    let block_action = vm.block_action;

    let on_role_change = Callback::new(move |(id, role): (String, Role)| {
        role_action.dispatch((id, role));
    });
    let on_toggle_block = Callback::new(move |id: String| block_action.dispatch(id));

    view! {
        <DashboardLayout title="Manage User" current_path="/admin/manage_user">
            <p class="mb-4 text-sm text-gray-500">
                {move || user_count_label(users.with(Vec::len))}
            </p>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || users_resource.get().map(|result| match result {
                    Ok(_) => view! {
                        <UsersTable
                            users=users.into()
                            updates=updates.into()
                            on_role_change=on_role_change
                            on_toggle_block=on_toggle_block
                        />
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.error /> }.into_view(),
                })}
            </Suspense>
        </DashboardLayout>
    }
}
