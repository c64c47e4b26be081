use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let fields = e
                        .details
                        .as_ref()
                        .and_then(|details| details.get("errors"))
                        .and_then(|errors| errors.as_array())
                        .cloned();
                    match fields {
                        Some(errors) if e.code == "VALIDATION_ERROR" => view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|err| {
                                    view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        _ => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Full-page error for a session token that could not be read.
#[component]
pub fn SessionErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 p-6">
            <div class="max-w-md rounded-lg border border-red-200 bg-white p-6 shadow">
                <h1 class="text-lg font-semibold text-red-700">"Session error"</h1>
                <p class="mt-2 text-sm text-gray-700">{message}</p>
                <p class="mt-4 text-sm text-gray-500">"Clear your cookies and sign in again."</p>
            </div>
        </div>
    }
}
