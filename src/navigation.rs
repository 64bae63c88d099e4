use dioxus::prelude::*;
use dioxus_router::{navigator, Link};
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;

use crate::config::SiteConfig;
use crate::hooks::{use_global_listener, use_scroll_y, ListenerTarget};
use crate::routes::Route;
use crate::scroll::{smooth_scroll_to, HeaderChrome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Projects", href: "/projects" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.open {
            "menu-toggle active"
        } else {
            "menu-toggle"
        }
    }
}

/// The last section, in document order, whose top minus `lookahead` has
/// been scrolled past.
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64, lookahead: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - lookahead)
        .last()
        .map(|(id, _)| id.as_str())
}

/// `"#contact" -> Some("contact")`; page paths and a bare `#` yield `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_scroll_top(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAction {
    ScrollTo(f64),
    GoHome,
}

/// Anchors that are not on the current page live on the home page.
pub fn resolve_anchor_click(element_top: Option<f64>, header_offset: f64) -> AnchorAction {
    match element_top {
        Some(top) => AnchorAction::ScrollTo(anchor_scroll_top(top, header_offset)),
        None => AnchorAction::GoHome,
    }
}

/// Anchor clicked on another page, scrolled to once the home page mounts.
#[derive(Clone, Copy)]
pub struct PendingAnchor(pub Signal<Option<&'static str>>);

impl PendingAnchor {
    pub fn request(&mut self, id: &'static str) {
        self.0.set(Some(id));
    }

    pub fn take(&mut self) -> Option<&'static str> {
        let id = *self.0.peek();
        if id.is_some() {
            self.0.set(None);
        }
        id
    }
}

/// Scrolls to the anchor left behind by a cross-page nav click, if any.
pub fn use_pending_anchor_scroll(header_offset: f64) {
    let mut pending = use_context::<PendingAnchor>();
    use_effect(move || {
        let Some(id) = pending.take() else {
            return;
        };
        match resolve_anchor_click(element_top(id), header_offset) {
            AnchorAction::ScrollTo(top) => smooth_scroll_to(top),
            AnchorAction::GoHome => tracing::debug!("nav: #{id} is missing on the home page"),
        }
    });
}

/// Page-level marking: the home page claims both `/` and `#home`.
pub fn page_link_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    match path {
        "" | "/index.html" => href == "/" || href == "#home",
        page => href == page,
    }
}

/// Anchor links follow the section in view; page links follow the path.
pub fn link_active(path: &str, href: &str, section: Option<&str>) -> bool {
    match (anchor_id(href), section) {
        (Some(id), Some(section)) => id == section,
        _ => page_link_active(path, href),
    }
}

#[cfg(target_arch = "wasm32")]
fn section_offsets() -> Vec<(String, f64)> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn section_offsets() -> Vec<(String, f64)> {
    Vec::new()
}

fn element_top(id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Header with logo, menu toggle and nav links for the page at `path`.
#[component]
pub fn NavBar(path: String) -> Element {
    let config = use_context::<SiteConfig>();
    let lookahead = config.scroll.section_lookahead;
    let header_offset = config.scroll.header_offset;
    let header_threshold = config.scroll.header_threshold;

    let router = navigator();
    let mut pending = use_context::<PendingAnchor>();
    let mut menu = use_signal(MenuState::default);
    let mut section = use_signal(|| None::<String>);
    let scroll_y = use_scroll_y();

    #[cfg(target_arch = "wasm32")]
    let mut toggle_el = use_signal(|| None::<web_sys::Element>);
    #[cfg(target_arch = "wasm32")]
    let mut links_el = use_signal(|| None::<web_sys::Element>);

    use_effect(use_reactive((&path,), move |(_path,)| {
        let y = scroll_y();
        let sections = section_offsets();
        let current = active_section(&sections, y, lookahead).map(str::to_string);
        if *section.peek() != current {
            section.set(current);
        }
    }));

    use_global_listener(ListenerTarget::Document, "click", move |_event| {
        if !menu.peek().is_open() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let Some(target) = _event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            let inside = [toggle_el, links_el].iter().any(|element| {
                element
                    .peek()
                    .as_ref()
                    .is_some_and(|element| element.contains(Some(&target)))
            });
            if inside {
                return;
            }
        }
        menu.write().close();
    });

    let chrome = HeaderChrome::for_scroll(scroll_y(), header_threshold);
    let current_section = section();
    let links: Vec<(NavItem, &'static str)> = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if link_active(&path, item.href, current_section.as_deref()) {
                "nav-link active"
            } else {
                "nav-link"
            };
            (*item, class)
        })
        .collect();

    rsx! {
        header { class: chrome.class_name(),
            nav { class: "navbar",
                Link { to: Route::Home {}, class: "logo", "{config.owner_name}" }
                button {
                    id: "menu-toggle",
                    class: menu().toggle_class(),
                    aria_label: "Toggle navigation",
                    aria_expanded: menu().is_open(),
                    onmounted: move |_event| {
                        #[cfg(target_arch = "wasm32")]
                        toggle_el.set(Some(_event.data.as_ref().as_web_event()));
                    },
                    onclick: move |_| menu.write().toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
                ul {
                    id: "nav-links",
                    class: menu().links_class(),
                    onmounted: move |_event| {
                        #[cfg(target_arch = "wasm32")]
                        links_el.set(Some(_event.data.as_ref().as_web_event()));
                    },
                    for (item, class) in links {
                        li { key: "{item.href}",
                            if let Some(id) = anchor_id(item.href) {
                                a {
                                    class,
                                    href: item.href,
                                    onclick: move |event: MouseEvent| {
                                        event.prevent_default();
                                        menu.write().close();
                                        match resolve_anchor_click(element_top(id), header_offset) {
                                            AnchorAction::ScrollTo(top) => smooth_scroll_to(top),
                                            AnchorAction::GoHome => {
                                                tracing::debug!("nav: #{id} not on this page, going home");
                                                pending.request(id);
                                                router.push(Route::Home {});
                                            }
                                        }
                                    },
                                    "{item.label}"
                                }
                            } else {
                                Link {
                                    to: item.href,
                                    class,
                                    onclick: move |_| menu.write().close(),
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 700.0),
            ("skills".to_string(), 1400.0),
            ("contact".to_string(), 2100.0),
        ]
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert_eq!(menu.links_class(), "nav-links");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.links_class(), "nav-links active");
        assert_eq!(menu.toggle_class(), "menu-toggle active");
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn active_section_uses_lookahead() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 200.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0, 200.0), Some("contact"));
    }

    #[test]
    fn no_sections_means_no_active_section() {
        assert_eq!(active_section(&[], 300.0, 200.0), None);
        let late = vec![("footer".to_string(), 900.0)];
        assert_eq!(active_section(&late, 0.0, 200.0), None);
    }

    #[test]
    fn anchor_ids() {
        assert_eq!(anchor_id("#contact"), Some("contact"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/about"), None);
    }

    #[test]
    fn anchor_scroll_subtracts_header() {
        assert_eq!(anchor_scroll_top(1400.0, 80.0), 1320.0);
    }

    #[test]
    fn missing_anchor_sends_the_click_home() {
        assert_eq!(resolve_anchor_click(Some(2100.0), 80.0), AnchorAction::ScrollTo(2020.0));
        assert_eq!(resolve_anchor_click(None, 80.0), AnchorAction::GoHome);
    }

    thread_local! {
        static PENDING: RefCell<Option<PendingAnchor>> = const { RefCell::new(None) };
    }

    fn landing_host() -> Element {
        let pending = use_context_provider(|| PendingAnchor(Signal::new(Some("contact"))));
        PENDING.with(|slot| *slot.borrow_mut() = Some(pending));
        rsx! { Landing {} }
    }

    #[component]
    fn Landing() -> Element {
        use_pending_anchor_scroll(80.0);
        rsx! { section { id: "contact" } }
    }

    #[tokio::test]
    async fn home_consumes_the_pending_anchor_once() {
        let mut dom = VirtualDom::new(landing_host);
        dom.rebuild_in_place();
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();

        let pending = PENDING.with(|slot| *slot.borrow()).expect("host rendered");
        assert_eq!(dom.in_runtime(|| *pending.0.peek()), None);

        let mut pending = pending;
        dom.in_runtime(|| {
            pending.request("skills");
            assert_eq!(pending.take(), Some("skills"));
            assert_eq!(pending.take(), None);
        });
    }

    #[test]
    fn page_marking() {
        assert!(page_link_active("/", "#home"));
        assert!(page_link_active("/", "/"));
        assert!(!page_link_active("/", "/about"));
        assert!(page_link_active("/about", "/about"));
        assert!(page_link_active("/projects/", "/projects"));
        assert!(!page_link_active("/about", "#home"));
    }

    #[test]
    fn anchor_links_follow_the_section_in_view() {
        assert!(link_active("/", "#skills", Some("skills")));
        assert!(!link_active("/", "#home", Some("skills")));
        assert!(link_active("/", "#home", None));
        assert!(link_active("/about", "/about", Some("story")));
    }
}
