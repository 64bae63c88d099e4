use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::{sleep_ms, use_first_intersection, FirstIntersection};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} fade-in visible")
    } else {
        format!("{base} fade-in")
    }
}

/// Latch for the scroll-in reveal: 10 % visible, pulled in 50px from the bottom.
pub fn use_reveal() -> FirstIntersection {
    use_first_intersection(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN)
}

/// Wraps children in an element that fades in once it scrolls into view.
#[component]
pub fn Reveal(class: String, children: Element) -> Element {
    let trigger = use_reveal();
    let class = reveal_class(&class, trigger.seen());
    rsx! {
        div { class: "{class}", onmounted: move |event| trigger.on_mounted(event),
            {children}
        }
    }
}

/// Reveals a captured string one character per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Appends the next character; returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

#[component]
pub fn TypingHeadline(text: String) -> Element {
    let config = use_context::<SiteConfig>();
    let start_ms = config.timings.typing_start_ms;
    let interval_ms = config.timings.typing_interval_ms;
    let mut typed = use_signal(String::new);

    use_hook(move || {
        let mut writer = Typewriter::new(&text);
        if writer.is_finished() {
            return;
        }
        spawn(async move {
            sleep_ms(start_ms).await;
            while writer.tick() {
                typed.set(writer.visible_text());
                sleep_ms(interval_ms).await;
            }
        });
    });

    rsx! {
        h1 { class: "hero-title", "{typed}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn types_one_char_per_tick() {
        let mut writer = Typewriter::new("Hi!");
        assert_eq!(writer.visible_text(), "");
        let mut frames = Vec::new();
        while writer.tick() {
            frames.push(writer.visible_text());
        }
        assert_eq!(frames, vec!["H", "Hi", "Hi!"]);
        assert!(writer.is_finished());
        assert!(!writer.tick());
    }

    #[test]
    fn multibyte_text_is_split_on_chars() {
        let mut writer = Typewriter::new("Olá");
        writer.tick();
        writer.tick();
        writer.tick();
        assert_eq!(writer.visible_text(), "Olá");
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_finished());
        assert!(!writer.tick());
        assert_eq!(writer.visible_text(), "");
    }

    #[test]
    fn reveal_classes() {
        assert_eq!(reveal_class("skill-card", false), "skill-card fade-in");
        assert_eq!(reveal_class("skill-card", true), "skill-card fade-in visible");
    }
}
