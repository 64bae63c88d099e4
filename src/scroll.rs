use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::use_scroll_y;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderChrome {
    Translucent,
    Scrolled,
}

impl HeaderChrome {
    /// Strictly past `threshold` counts as scrolled.
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderChrome::Scrolled
        } else {
            HeaderChrome::Translucent
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            HeaderChrome::Translucent => "site-header",
            HeaderChrome::Scrolled => "site-header scrolled",
        }
    }
}

pub fn scroll_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = top;
    }
}

#[component]
pub fn ScrollToTop() -> Element {
    let config = use_context::<SiteConfig>();
    let scroll_y = use_scroll_y();
    let visible = scroll_to_top_visible(scroll_y(), config.scroll.scroll_top_threshold);

    rsx! {
        button {
            class: if visible { "scroll-to-top visible" } else { "scroll-to-top" },
            aria_label: "Scroll to top",
            onclick: move |_| smooth_scroll_to(0.0),
            i { class: "fas fa-arrow-up" }
        }
    }
}
