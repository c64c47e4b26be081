use super::repository;
use crate::{
    api::{ApiClient, ApiError, User},
    state::session::use_session,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct UserDashboardViewModel {
    pub profile: Resource<(), Result<Option<User>, ApiError>>,
    /// Local copy the edit flow merges into.
    pub record: RwSignal<Option<User>>,
}

pub fn use_user_dashboard_view_model() -> UserDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = use_session();
    let record = create_rw_signal(None::<User>);

    let profile = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_profile(&api).await }
        },
    );

    create_effect(move |_| match profile.get() {
        Some(Ok(user)) => {
            if let Some(user) = &user {
                session.establish(user.clone());
            }
            record.set(user);
        }
        Some(Err(error)) => {
            session.handle_error(&error);
        }
        None => {}
    });

    UserDashboardViewModel { profile, record }
}
