//! Name/email edit dialog shared by both dashboards.
//!
//! The two dashboards differ only in how they reconcile after a save: the
//! admin dashboard refetches, the user dashboard patches its local record.

use crate::{
    api::{ApiClient, UpdateUserPayload, User},
    components::{
        common::{Button, ButtonVariant, TextField},
        modal::Modal,
    },
    state::{
        notify::{use_notifier, Notifier},
        session::{use_session, SessionContext},
    },
    utils::validation::{self, FieldErrors},
};
use leptos::*;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<UpdateUserPayload, FieldErrors> {
        let form = self.normalized();
        validation::check(&form)?;
        Ok(UpdateUserPayload::identity(form.name, form.email))
    }
}

/// How a dashboard catches up with a saved profile.
#[derive(Clone, Copy)]
pub enum Reconcile {
    /// Bump the counter the dashboard's resources key on.
    Reload(RwSignal<u32>),
    /// Patch the changed fields into the record on screen.
    Merge(RwSignal<Option<User>>),
}

impl Reconcile {
    pub fn apply(&self, payload: &UpdateUserPayload) {
        match self {
            Reconcile::Reload(counter) => counter.update(|value| *value = value.wrapping_add(1)),
            Reconcile::Merge(record) => record.update(|user| {
                if let Some(user) = user.as_mut() {
                    payload.apply_to(user);
                }
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    Saved,
    /// The backend or the network refused; the form stays open.
    Failed(String),
}

pub async fn submit_profile(
    api: &ApiClient,
    form: &ProfileForm,
    reconcile: Reconcile,
    notifier: Notifier,
    session: SessionContext,
) -> SubmitOutcome {
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match api.update_profile(&payload).await {
        Ok(response) if response.success => {
            notifier.success("Profile updated");
            reconcile.apply(&payload);
            SubmitOutcome::Saved
        }
        Ok(response) => {
            let message = response.message_or("Update failed");
            notifier.error(message.clone());
            SubmitOutcome::Failed(message)
        }
        Err(error) => {
            session.handle_error(&error);
            log::error!("profile update failed: {}", error);
            notifier.error("Something went wrong");
            SubmitOutcome::Failed(error.error)
        }
    }
}

#[component]
pub fn ProfileEditModal(user: Signal<Option<User>>, reconcile: Reconcile) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let notifier = use_notifier();
    let session = use_session();

    let open = create_rw_signal(false);
    let form = create_rw_signal(ProfileForm::default());
    let errors = create_rw_signal(FieldErrors::default());

    let save_action = create_action(move |draft: &ProfileForm| {
        let api = api.clone();
        let draft = draft.clone();
        async move { submit_profile(&api, &draft, reconcile, notifier, session).await }
    });
    let saving = save_action.pending();

    create_effect(move |_| match save_action.value().get() {
        Some(SubmitOutcome::Saved) => open.set(false),
        Some(SubmitOutcome::Invalid(found)) => errors.set(found),
        _ => {}
    });

    let on_open = move |_: ev::MouseEvent| {
        if let Some(current) = user.get_untracked() {
            form.set(ProfileForm::from_user(&current));
        }
        errors.set(FieldErrors::default());
        open.set(true);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = form.get_untracked();
        if let Err(found) = draft.to_payload() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        save_action.dispatch(draft);
    };

    let name = Signal::derive(move || form.with(|f| f.name.clone()));
    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let name_error = Signal::derive(move || errors.with(|e| e.get("name")));
    let email_error = Signal::derive(move || errors.with(|e| e.get("email")));

    view! {
        <Button variant=ButtonVariant::Secondary on_click=Callback::new(on_open)>"Edit Profile"</Button>
        <Modal
            is_open=open.into()
            title="Edit Profile"
            on_close=Callback::new(move |_| open.set(false))
        >
            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    label="Name"
                    name="name"
                    value=name
                    on_input=Callback::new(move |value: String| form.update(|f| f.name = value))
                    error=name_error
                />
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                    error=email_error
                />
                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| open.set(false))
                    >
                        "Cancel"
                    </Button>
                    <Button button_type="submit" loading=saving>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
