use crate::{
    api::User,
    pages::admin_users::utils::{block_button_label, status_label},
    session::Role,
    utils::format::{format_date, initials, or_dash},
};
use leptos::*;

fn badge_classes(user: &User) -> &'static str {
    if user.is_blocked() {
        "bg-red-100 text-red-700"
    } else {
        "bg-green-100 text-green-700"
    }
}

#[component]
pub fn UserRow(
    user: User,
    busy: Signal<bool>,
    on_role_change: Callback<(String, Role)>,
    on_toggle_block: Callback<String>,
) -> impl IntoView {
    let id = user.id.clone();
    let current_role = user.role;
    let blocked = user.is_blocked();
    let status = status_label(&user);
    let badge = badge_classes(&user);
    let button_user = user.clone();
    let button_label = move || block_button_label(&button_user, busy.get());
    let button_class = if blocked {
        "rounded-md bg-green-600 px-3 py-1 text-sm font-semibold text-white disabled:opacity-50"
    } else {
        "rounded-md bg-red-600 px-3 py-1 text-sm font-semibold text-white disabled:opacity-50"
    };
    let role_id = id.clone();
    let block_id = id.clone();

    view! {
        <tr class="border-b border-gray-100" data-user-id=id>
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <span class="flex h-9 w-9 items-center justify-center rounded-full bg-indigo-100 text-sm font-semibold text-indigo-700">
                        {initials(&user.name)}
                    </span>
                    <div>
                        <p class="text-sm font-medium text-gray-900">{user.name.clone()}</p>
                        <p class="text-xs text-gray-500">{user.email.clone()}</p>
                    </div>
                </div>
            </td>
            <td class="px-4 py-3 text-sm text-gray-700">
                <p>{or_dash(user.phone.as_deref())}</p>
                <p class="text-xs text-gray-500">{or_dash(user.address.as_deref())}</p>
            </td>
            <td class="px-4 py-3 text-sm text-gray-700">{format_date(&user.created_at)}</td>
            <td class="px-4 py-3">
                <select
                    class="rounded-md border border-gray-300 px-2 py-1 text-sm disabled:opacity-50"
                    disabled=move || busy.get()
                    on:change=move |ev| {
                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                            if role != current_role {
                                on_role_change.call((role_id.clone(), role));
                            }
                        }
                    }
                >
                    {Role::ALL
                        .iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_str() selected=*role == current_role>
                                    {role.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td class="px-4 py-3">
                <span class=format!("rounded-full px-2 py-1 text-xs font-semibold {}", badge)>{status}</span>
            </td>
            <td class="px-4 py-3 text-right">
                <button
                    type="button"
                    class=button_class
                    disabled=move || busy.get()
                    on:click=move |_| on_toggle_block.call(block_id.clone())
                >
                    {button_label}
                </button>
            </td>
        </tr>
    }
}
