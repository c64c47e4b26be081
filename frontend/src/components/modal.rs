use leptos::ev::KeyboardEvent;
use leptos::*;

/// Dialog shell: backdrop, title bar, close on Escape or backdrop click.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);
    let title = store_value(title);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-md rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-gray-900">{move || title.with_value(|title| title.get())}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-900"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_modal_renders_dialog_and_children() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| true)
                    title="Edit Profile"
                    on_close=Callback::new(|_| {})
                >
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Edit Profile"));
        assert!(html.contains("modal-body"));
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| false)
                    title="Edit Profile"
                    on_close=Callback::new(|_| {})
                >
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(!html.contains("modal-body"));
    }

    #[test]
    fn reactive_title_follows_its_signal() {
        let html = render_to_string(move || {
            let title = create_rw_signal("Edit Profile".to_string());
            title.set("Edit Admin".to_string());
            view! {
                <Modal
                    is_open=Signal::derive(|| true)
                    title=title
                    on_close=Callback::new(|_| {})
                >
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(html.contains("Edit Admin"));
    }
}
