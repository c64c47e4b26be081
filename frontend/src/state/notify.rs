use leptos::*;

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self
            .notices
            .try_update(|notices| notices.retain(|notice| notice.id != id));
    }

    fn push(&self, level: NoticeLevel, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match level {
            NoticeLevel::Success => log::info!("{}", message),
            NoticeLevel::Error => log::warn!("{}", message),
        }
        self.notices.update(|notices| {
            notices.push(Notice { id, level, message });
        });
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let notifier = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notifier.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    match use_context::<Notifier>() {
        Some(notifier) => notifier,
        None => {
            let notifier = Notifier::new();
            provide_context(notifier);
            notifier
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notices_queue_in_order_and_dismiss_by_id() {
        with_runtime(|| {
            let notifier = Notifier::new();
            let first = notifier.success("Profile updated");
            let second = notifier.error("Update failed");

            let notices = notifier.notices().get_untracked();
            assert_eq!(notices.len(), 2);
            assert_eq!(notices[0].level, NoticeLevel::Success);
            assert_eq!(notices[1].message, "Update failed");

            notifier.dismiss(first);
            let notices = notifier.notices().get_untracked();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].id, second);
        });
    }

    #[test]
    fn use_notifier_reuses_the_provided_context() {
        with_runtime(|| {
            let notifier = use_notifier();
            notifier.success("saved");
            assert_eq!(use_notifier().notices().get_untracked().len(), 1);
        });
    }
}
