use super::UserRow;
use crate::{
    api::User,
    components::layout::EmptyState,
    pages::admin_users::utils::RowUpdates,
    session::Role,
};
use leptos::*;

#[component]
pub fn UsersTable(
    users: Signal<Vec<User>>,
    updates: Signal<RowUpdates>,
    on_role_change: Callback<(String, Role)>,
    on_toggle_block: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || users.with(|users| !users.is_empty())
            fallback=|| view! { <EmptyState message="No users found" /> }
        >
            <div class="overflow-x-auto rounded-lg bg-white shadow">
                <table class="min-w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-4 py-3">"User"</th>
                            <th class="px-4 py-3">"Contact"</th>
                            <th class="px-4 py-3">"Joined"</th>
                            <th class="px-4 py-3">"Role"</th>
                            <th class="px-4 py-3">"Status"</th>
                            <th class="px-4 py-3 text-right">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user: &User| (user.id.clone(), user.role, user.is_verified)
                            children=move |user: User| {
                                let id = user.id.clone();
                                let busy = Signal::derive(move || updates.with(|u| u.is_busy(&id)));
                                view! {
                                    <UserRow
                                        user=user
                                        busy=busy
                                        on_role_change=on_role_change
                                        on_toggle_block=on_toggle_block
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin_users::utils::RowOperation;
    use crate::test_support::helpers::sample_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_table_says_no_users_found() {
        let html = render_to_string(|| {
            view! {
                <UsersTable
                    users=Signal::derive(Vec::new)
                    updates=Signal::derive(RowUpdates::default)
                    on_role_change=Callback::new(|_| {})
                    on_toggle_block=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No users found"));
    }

    #[test]
    fn only_the_busy_row_is_processing() {
        let html = render_to_string(|| {
            let users = vec![
                sample_user("u1", Role::User, true),
                sample_user("u2", Role::User, true),
            ];
            let mut updates = RowUpdates::default();
            updates.begin("u1", RowOperation::Block);
            view! {
                <UsersTable
                    users=Signal::derive(move || users.clone())
                    updates=Signal::derive(move || updates.clone())
                    on_role_change=Callback::new(|_| {})
                    on_toggle_block=Callback::new(|_| {})
                />
            }
        });
        assert_eq!(html.matches("Processing...").count(), 1);
        assert!(html.contains(">Block<"));
    }
}
