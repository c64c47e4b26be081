use super::{repository, utils::RegisterForm};
use crate::{
    api::{ApiClient, ImageUpload},
    state::notify::{use_notifier, Notifier},
    utils::{navigation, validation::FieldErrors},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Invalid(FieldErrors),
    Registered,
    Rejected(String),
    Failed(String),
}

pub async fn submit_registration(
    api: &ApiClient,
    form: &RegisterForm,
    avatar: Option<ImageUpload>,
    notifier: Notifier,
) -> RegisterOutcome {
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };

    match repository::register(api, &payload, avatar).await {
        Ok(response) if response.success => {
            notifier.success(response.message_or("Registration successful"));
            RegisterOutcome::Registered
        }
        Ok(response) => {
            let message = response.message_or("Registration failed");
            notifier.error(message.clone());
            RegisterOutcome::Rejected(message)
        }
        Err(error) => {
            notifier.error(error.error.clone());
            RegisterOutcome::Failed(error.error)
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegisterForm>,
    pub errors: RwSignal<FieldErrors>,
    pub avatar: RwSignal<Option<ImageUpload>>,
    pub avatar_error: RwSignal<Option<String>>,
    pub submit_action: Action<(RegisterForm, Option<ImageUpload>), RegisterOutcome>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(errors) = form.to_payload() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::default());
        self.submit_action
            .dispatch((form, self.avatar.get_untracked()));
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let notifier = use_notifier();

    let form = create_rw_signal(RegisterForm::default());
    let errors = create_rw_signal(FieldErrors::default());
    let avatar = create_rw_signal(None::<ImageUpload>);
    let avatar_error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |(form, avatar): &(RegisterForm, Option<ImageUpload>)| {
        let api = api.clone();
        let form = form.clone();
        let avatar = avatar.clone();
        async move { submit_registration(&api, &form, avatar, notifier).await }
    });

    create_effect(move |_| match submit_action.value().get() {
        Some(RegisterOutcome::Registered) => {
            let target = navigation::post_auth_target(navigation::query_param("redirectPath"));
            navigation::redirect(&target);
        }
        Some(RegisterOutcome::Invalid(found)) => errors.set(found),
        _ => {}
    });

    RegisterViewModel {
        form,
        errors,
        avatar,
        avatar_error,
        submit_action,
    }
}
