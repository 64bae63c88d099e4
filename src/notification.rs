use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::hooks::sleep_ms;

const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Info => "fas fa-info-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub leaving: bool,
}

/// Live notifications in creation order. No deduplication, no queue limit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Starts the slide-out. Returns false when the notification is already
    /// gone or already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.leaving => {
                item.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

pub fn use_notifications() -> Signal<NotificationCenter> {
    use_context::<Signal<NotificationCenter>>()
}

/// Shows a notification and schedules its automatic dismissal. The timers
/// run at the root scope, so they outlive the component that raised it.
pub fn notify(
    mut center: Signal<NotificationCenter>,
    kind: NotificationKind,
    message: impl Into<String>,
    dismiss_after_ms: u32,
) {
    let id = center.write().push(kind, message);
    let _ = spawn_forever(async move {
        sleep_ms(dismiss_after_ms).await;
        dismiss(center, id);
    });
}

pub fn dismiss(mut center: Signal<NotificationCenter>, id: u64) {
    if !center.write().begin_dismiss(id) {
        return;
    }
    let _ = spawn_forever(async move {
        sleep_ms(SLIDE_OUT_MS).await;
        center.write().remove(id);
    });
}

#[component]
pub fn NotificationTray() -> Element {
    let center = use_notifications();
    let items: Vec<(Notification, String)> = center
        .read()
        .items()
        .iter()
        .map(|item| {
            let mut class = format!("notification {}", item.kind.class_name());
            if item.leaving {
                class.push_str(" leaving");
            }
            (item.clone(), class)
        })
        .collect();

    rsx! {
        div { class: "notification-tray", aria_live: "polite",
            for (item, class) in items {
                div { key: "{item.id}", class: "{class}",
                    i { class: item.kind.icon() }
                    span { "{item.message}" }
                    button {
                        r#type: "button",
                        class: "close-notification",
                        aria_label: "Dismiss notification",
                        onclick: move |_| dismiss(center, item.id),
                        i { class: "fas fa-times" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use pretty_assertions::assert_eq;

    thread_local! {
        static HANDLES: RefCell<Option<(Signal<NotificationCenter>, Signal<bool>)>> =
            const { RefCell::new(None) };
    }

    fn host() -> Element {
        let center = use_context_provider(|| Signal::new(NotificationCenter::default()));
        let show_raiser = use_signal(|| true);
        HANDLES.with(|handles| *handles.borrow_mut() = Some((center, show_raiser)));
        rsx! {
            if show_raiser() {
                Raiser {}
            }
        }
    }

    #[component]
    fn Raiser() -> Element {
        let center = use_notifications();
        use_hook(move || notify(center, NotificationKind::Success, "sent", 5000));
        rsx! { "raised" }
    }

    async fn drain(dom: &mut VirtualDom) {
        for _ in 0..20 {
            if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn auto_dismiss_outlives_the_raising_component() {
        let mut dom = VirtualDom::new(host);
        dom.rebuild_in_place();
        let (center, mut show_raiser) = HANDLES
            .with(|handles| *handles.borrow())
            .expect("host rendered");
        assert_eq!(dom.in_runtime(|| center.peek().items().len()), 1);

        dom.in_runtime(|| show_raiser.set(false));
        dom.render_immediate_to_vec();
        drain(&mut dom).await;

        let left = dom.in_runtime(|| center.peek().items().to_vec());
        assert_eq!(left, Vec::<Notification>::new());
    }

    #[test]
    fn ids_are_unique_and_duplicates_coexist() {
        let mut center = NotificationCenter::default();
        let first = center.push(NotificationKind::Info, "same");
        let second = center.push(NotificationKind::Info, "same");
        assert_ne!(first, second);
        assert_eq!(center.items().len(), 2);
    }

    #[test]
    fn dismiss_is_two_phase_and_idempotent() {
        let mut center = NotificationCenter::default();
        let id = center.push(NotificationKind::Success, "sent");
        assert!(center.begin_dismiss(id));
        assert!(center.items()[0].leaving);
        assert!(!center.begin_dismiss(id));
        center.remove(id);
        assert!(center.items().is_empty());
        assert!(!center.begin_dismiss(id));
    }

    #[test]
    fn removing_one_keeps_the_others() {
        let mut center = NotificationCenter::default();
        let a = center.push(NotificationKind::Success, "a");
        let b = center.push(NotificationKind::Error, "b");
        center.remove(a);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].id, b);
        assert_eq!(center.items()[0].kind.icon(), "fas fa-exclamation-circle");
    }
}
