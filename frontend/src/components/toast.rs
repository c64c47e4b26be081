use crate::state::notify::{use_notifier, Notice, NoticeLevel};
use leptos::*;

fn notice_classes(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "border-green-200 bg-green-50 text-green-800",
        NoticeLevel::Error => "border-red-200 bg-red-50 text-red-800",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let notices = notifier.notices();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || notices.get()
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("flex items-start justify-between rounded-md border px-4 py-3 text-sm shadow {}", notice_classes(notice.level))
                            role="status"
                        >
                            <span>{notice.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="ml-3 opacity-60 hover:opacity-100"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
