use crate::api::Analysis;
use leptos::*;

fn stat_card(label: &'static str, value: u64, accent: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-white p-5 shadow">
            <p class="text-sm font-medium text-gray-500">{label}</p>
            <p class=format!("mt-2 text-3xl font-semibold {}", accent)>{value}</p>
        </div>
    }
}

#[component]
pub fn StatCards(analysis: Analysis) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            {stat_card("Total Admin", analysis.total_admin, "text-indigo-600")}
            {stat_card("Total User", analysis.total_user, "text-gray-900")}
            {stat_card("Blocked User", analysis.total_blocked_user, "text-red-600")}
        </div>
    }
}
