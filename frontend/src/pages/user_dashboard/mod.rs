use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::{UserDashboardPanel, UserProfileSection};

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! { <UserDashboardPanel /> }
}
