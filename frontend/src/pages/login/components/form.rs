use crate::{
    api::ApiError,
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email = form.email;
    let password = form.password;

    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <TextField
                label="Email"
                name="email"
                input_type="email"
                value=email.into()
                on_input=Callback::new(move |value: String| email.set(value))
                disabled=pending
            />
            <TextField
                label="Password"
                name="password"
                input_type="password"
                value=password.into()
                on_input=Callback::new(move |value: String| password.set(value))
                disabled=pending
            />
            <InlineErrorMessage error=error />
            <Button button_type="submit" class="w-full" loading=pending>
                {move || if pending.get() { "Signing in..." } else { "Login" }}
            </Button>
        </form>
    }
}
