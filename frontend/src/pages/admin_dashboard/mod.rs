use leptos::*;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <AdminDashboardPanel /> }
}
