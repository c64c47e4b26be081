use super::repository::{self, AdminOverview};
use crate::{
    api::{ApiClient, ApiError},
    state::session::use_session,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    /// Bumped after a profile save to refetch everything.
    pub reload: RwSignal<u32>,
    /// Source the overview resource is keyed on.
    pub overview_key: Signal<u32>,
    pub overview: Resource<u32, Result<AdminOverview, ApiError>>,
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = use_session();
    let reload = create_rw_signal(0u32);
    let overview_key = Signal::derive(move || reload.get());

    let overview = create_resource(
        move || overview_key.get(),
        move |_| {
            let api = api.clone();
            async move { repository::load_overview(&api).await }
        },
    );

    create_effect(move |_| match overview.get() {
        Some(Ok(AdminOverview {
            profile: Some(profile),
            ..
        })) => session.establish(profile),
        Some(Err(error)) => {
            session.handle_error(&error);
        }
        _ => {}
    });

    AdminDashboardViewModel {
        reload,
        overview_key,
        overview,
    }
}
