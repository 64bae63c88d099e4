use dioxus::dioxus_core::Task;
use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::sleep_ms;
use crate::image_fallback::FallbackImage;
use crate::notification::{notify, use_notifications, NotificationKind};
use crate::projects::{all_projects, Project, FILTER_OPTIONS};
use crate::reveal::{reveal_class, use_reveal};

pub const STAGGER_MS: u32 = 50;
const LOAD_MORE_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => ProjectFilter::All,
            tag => ProjectFilter::Category(tag.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(tag) => project.has_category(tag),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
    /// Delay before each visible card gets its "show" state; `None` for hidden cards.
    pub reveal_delays: Vec<Option<u32>>,
    pub show_no_results: bool,
}

impl FilterOutcome {
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }
}

pub fn filter_projects(filter: &ProjectFilter, cards: &[Project]) -> FilterOutcome {
    let visible: Vec<bool> = cards.iter().map(|card| filter.matches(card)).collect();
    outcome_from(visible)
}

/// Case-insensitive substring match against title, description or the
/// space-joined tech tags. An empty term matches everything.
pub fn search_matches(term: &str, card: &Project) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    let techs = card
        .tech
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    card.title.to_lowercase().contains(&term)
        || card.description.to_lowercase().contains(&term)
        || techs.contains(&term)
}

pub fn search_projects(term: &str, cards: &[Project]) -> Vec<bool> {
    cards.iter().map(|card| search_matches(term, card)).collect()
}

/// Category filter and free-text search applied together.
pub fn combined_outcome(filter: &ProjectFilter, term: &str, cards: &[Project]) -> FilterOutcome {
    let by_category = filter_projects(filter, cards);
    let visible = by_category
        .visible
        .into_iter()
        .zip(search_projects(term, cards))
        .map(|(category, search)| category && search)
        .collect();
    outcome_from(visible)
}

fn outcome_from(visible: Vec<bool>) -> FilterOutcome {
    let reveal_delays = visible
        .iter()
        .enumerate()
        .map(|(index, visible)| visible.then_some(index as u32 * STAGGER_MS))
        .collect();
    let show_no_results = !visible.iter().any(|visible| *visible);
    FilterOutcome {
        visible,
        reveal_delays,
        show_no_results,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMoreState {
    Hidden,
    Ready,
    Loading,
}

impl LoadMoreState {
    pub fn initial(card_count: usize, page_size: usize) -> Self {
        if card_count > page_size {
            LoadMoreState::Ready
        } else {
            LoadMoreState::Hidden
        }
    }
}

pub fn card_class(visible: bool, shown: bool) -> &'static str {
    match (visible, shown) {
        (false, _) => "project-card hidden",
        (true, true) => "project-card show",
        (true, false) => "project-card",
    }
}

/// Filter state plus the scroll reveal; a card is drawn only once both are on.
pub fn grid_card_class(visible: bool, shown: bool, revealed: bool) -> String {
    reveal_class(card_class(visible, shown), revealed)
}

#[component]
pub fn ProjectsGrid() -> Element {
    let config = use_context::<SiteConfig>();
    let cards = all_projects();
    let mut filter = use_signal(|| ProjectFilter::All);
    let mut search = use_signal(String::new);
    let outcome = use_memo(move || combined_outcome(&filter(), &search(), cards));
    let mut shown = use_signal(|| vec![false; cards.len()]);
    let mut reveal_task = use_signal(|| None::<Task>);

    // Cascade: every visible card gets "show" at its own offset from the filter change.
    use_effect(move || {
        let outcome = outcome();
        if let Some(task) = reveal_task.write().take() {
            task.cancel();
        }
        shown.set(vec![false; outcome.visible.len()]);
        let task = spawn(async move {
            let mut elapsed = 0;
            for (index, delay) in outcome.reveal_delays.iter().enumerate() {
                let Some(delay) = *delay else {
                    continue;
                };
                sleep_ms(delay - elapsed).await;
                elapsed = delay;
                if let Some(slot) = shown.write().get_mut(index) {
                    *slot = true;
                }
            }
        });
        reveal_task.set(Some(task));
    });

    let current = outcome();
    let shown_now = shown();
    let rows: Vec<(&'static Project, bool, bool)> = cards
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let visible = current.visible.get(index).copied().unwrap_or(false);
            let shown = shown_now.get(index).copied().unwrap_or(false);
            (project, visible, shown)
        })
        .collect();

    rsx! {
        div { class: "projects-controls",
            div { class: "filter-buttons",
                for option in FILTER_OPTIONS.iter() {
                    button {
                        key: "{option.value}",
                        class: if filter().value() == option.value { "filter-btn active" } else { "filter-btn" },
                        "data-filter": option.value,
                        onclick: move |_| {
                            tracing::debug!("projects: filter {}", option.value);
                            filter.set(ProjectFilter::parse(option.value));
                        },
                        "{option.label}"
                    }
                }
            }
            if config.enable_project_search {
                div { class: "project-search",
                    i { class: "fas fa-search" }
                    input {
                        id: "project-search",
                        r#type: "search",
                        placeholder: "Search by title, description or technology",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                    }
                }
            }
        }
        div { id: "projects-grid", class: "projects-grid",
            for (project, visible, shown) in rows {
                GridCard { key: "{project.title}", project, visible, shown }
            }
            if current.show_no_results {
                div { id: "no-results-message", class: "no-results",
                    i { class: "fas fa-search" }
                    h3 { "No projects found" }
                    p { "Try selecting a different filter" }
                }
            }
        }
        LoadMore { card_count: cards.len(), page_size: config.load_more_page_size }
    }
}

#[component]
fn GridCard(project: &'static Project, visible: bool, shown: bool) -> Element {
    let trigger = use_reveal();
    let class = grid_card_class(visible, shown, trigger.seen());
    let categories = project.categories.join(" ");
    rsx! {
        article {
            class: "{class}",
            "data-category": "{categories}",
            onmounted: move |event| trigger.on_mounted(event),
            div { class: "project-image",
                FallbackImage { src: project.image.to_string(), alt: project.title.to_string() }
            }
            div { class: "project-info",
                h4 { "{project.title}" }
                p { "{project.description}" }
                div { class: "project-tech",
                    for tech in project.tech.iter() {
                        span { class: "tech-tag", "{tech}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LoadMore(card_count: usize, page_size: usize) -> Element {
    let config = use_context::<SiteConfig>();
    let notifications = use_notifications();
    let mut state = use_signal(|| LoadMoreState::initial(card_count, page_size));
    let dismiss_ms = config.timings.notification_ms;

    if state() == LoadMoreState::Hidden {
        return rsx! {};
    }

    rsx! {
        div { id: "load-more-section", class: "load-more",
            button {
                id: "load-more-btn",
                class: "btn btn-secondary",
                disabled: state() == LoadMoreState::Loading,
                onclick: move |_| {
                    state.set(LoadMoreState::Loading);
                    spawn(async move {
                        sleep_ms(LOAD_MORE_DELAY_MS).await;
                        notify(
                            notifications,
                            NotificationKind::Info,
                            "All projects are already displayed!",
                            dismiss_ms,
                        );
                        state.set(LoadMoreState::Hidden);
                    });
                },
                if state() == LoadMoreState::Loading {
                    i { class: "fas fa-spinner fa-spin" }
                    " Loading..."
                } else {
                    "Load More Projects"
                }
            }
        }
    }
}
