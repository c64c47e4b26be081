use super::avatar::AvatarPicker;
use crate::{
    components::common::{Button, TextField},
    pages::register::{utils::RegisterForm, view_model::RegisterViewModel},
    session::Role,
};
use leptos::{ev::SubmitEvent, *};

fn field(
    form: RwSignal<RegisterForm>,
    read: fn(&RegisterForm) -> String,
) -> Signal<String> {
    Signal::derive(move || form.with(read))
}

fn setter(form: RwSignal<RegisterForm>, write: fn(&mut RegisterForm, String)) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| write(f, value)))
}

#[component]
pub fn RegisterFormView(vm: RegisterViewModel, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;
    let pending = vm.submit_action.pending();
    let error_for = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name)));

    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <TextField
                label="Name"
                name="name"
                value=field(form, |f| f.name.clone())
                on_input=setter(form, |f, v| f.name = v)
                error=error_for("name")
            />
            <TextField
                label="Email"
                name="email"
                input_type="email"
                value=field(form, |f| f.email.clone())
                on_input=setter(form, |f, v| f.email = v)
                error=error_for("email")
            />
            <TextField
                label="Password"
                name="password"
                input_type="password"
                value=field(form, |f| f.password.clone())
                on_input=setter(form, |f, v| f.password = v)
                error=error_for("password")
            />
            <div>
                <label for="field-role" class="block text-sm font-medium text-gray-700">"Role"</label>
                <select
                    id="field-role"
                    name="role"
                    class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                    on:change=move |ev| {
                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                            form.update(|f| f.role = role);
                        }
                    }
                >
                    <option value=Role::User.as_str() selected=true>{Role::User.label()}</option>
                </select>
            </div>
            <TextField
                label="Phone"
                name="phone"
                value=field(form, |f| f.phone.clone())
                on_input=setter(form, |f, v| f.phone = v)
            />
            <TextField
                label="Address"
                name="address"
                value=field(form, |f| f.address.clone())
                on_input=setter(form, |f, v| f.address = v)
            />
            <AvatarPicker avatar=vm.avatar error=vm.avatar_error />
            <Button button_type="submit" class="w-full" loading=pending>
                {move || if pending.get() { "Creating account..." } else { "Register" }}
            </Button>
        </form>
    }
}
