use crate::{
    api::User,
    utils::format::{format_timestamp, initials, or_dash, yes_no},
};
use leptos::*;

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between border-b border-gray-100 py-2 text-sm">
            <dt class="font-medium text-gray-500">{label}</dt>
            <dd class="text-gray-900">{value}</dd>
        </div>
    }
}

/// Read-only account fields.
#[component]
pub fn ProfileDetails(user: User) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-white p-6 shadow">
            <div class="mb-4 flex items-center gap-3">
                <span class="flex h-12 w-12 items-center justify-center rounded-full bg-indigo-100 text-lg font-semibold text-indigo-700">
                    {initials(&user.name)}
                </span>
                <div>
                    <p class="text-lg font-semibold text-gray-900">{user.name.clone()}</p>
                    <p class="text-sm text-gray-500">{user.email.clone()}</p>
                </div>
            </div>
            <dl>
                {info_row("Name", user.name.clone())}
                {info_row("Email", user.email.clone())}
                {info_row("Phone", or_dash(user.phone.as_deref()))}
                {info_row("Address", or_dash(user.address.as_deref()))}
                {info_row("Role", user.role.label().to_string())}
                {info_row("Verified", yes_no(user.is_verified).to_string())}
                {info_row("Created", format_timestamp(&user.created_at))}
                {info_row("Updated", format_timestamp(&user.updated_at))}
            </dl>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::Role;
    use crate::test_support::helpers::sample_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_details_render_every_field() {
        let html = render_to_string(|| {
            view! { <ProfileDetails user=sample_user("u1", Role::Admin, false) /> }
        });
        assert!(html.contains("Member u1"));
        assert!(html.contains("u1@example.com"));
        assert!(html.contains("555-0100"));
        assert!(html.contains("Admin"));
        assert!(html.contains("No"));
        assert!(html.contains("Jan 05, 2025 09:30"));
    }
}
