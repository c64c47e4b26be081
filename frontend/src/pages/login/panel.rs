use super::{components::form::LoginForm, view_model::use_login_view_model};
use crate::components::layout::AuthLayout;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <AuthLayout title="Sign in to RoleDash">
            <LoginForm
                form=vm.form
                error=vm.error.into()
                pending=pending.into()
                on_submit=on_submit
            />
            <p class="text-center text-sm text-gray-600">
                "No account yet? "
                <a href="/register" class="font-medium text-indigo-600 hover:text-indigo-500">"Register"</a>
            </p>
        </AuthLayout>
    }
}
