use crate::{api::ImageUpload, pages::register::utils::check_avatar};
use leptos::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

#[component]
pub fn AvatarPicker(
    avatar: RwSignal<Option<ImageUpload>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            avatar.set(None);
            return;
        };
        if let Err(message) = check_avatar(&file.type_(), file.size()) {
            error.set(Some(message));
            avatar.set(None);
            input.set_value("");
            return;
        }
        error.set(None);
        spawn_local(async move {
            match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => avatar.set(Some(ImageUpload {
                    file_name: file.name(),
                    mime_type: file.type_(),
                    bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
                })),
                Err(_) => {
                    log::warn!("could not read avatar {}", file.name());
                    error.set(Some("Could not read the selected image".into()));
                }
            }
        });
    };

    view! {
        <div>
            <label for="field-avatar" class="block text-sm font-medium text-gray-700">"Profile image"</label>
            <input
                id="field-avatar"
                name="avatar"
                type="file"
                accept="image/*"
                class="mt-1 block w-full text-sm text-gray-700"
                on:change=on_change
            />
            {move || avatar.with(|avatar| {
                avatar
                    .as_ref()
                    .map(|image| view! { <p class="mt-1 text-xs text-gray-500">{image.file_name.clone()}</p> })
            })}
            {move || error.get().map(|message| view! { <p class="mt-1 text-xs text-red-600">{message}</p> })}
        </div>
    }
}
