use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ManageUsersPanel;

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    view! { <ManageUsersPanel /> }
}
