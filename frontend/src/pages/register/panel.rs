use super::{components::form::RegisterFormView, view_model::use_register_view_model};
use crate::components::layout::AuthLayout;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <AuthLayout title="Create your account">
            <RegisterFormView vm=vm on_submit=on_submit />
            <p class="text-center text-sm text-gray-600">
                "Already registered? "
                <a href="/login" class="font-medium text-indigo-600 hover:text-indigo-500">"Login"</a>
            </p>
        </AuthLayout>
    }
}
