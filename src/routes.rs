use dioxus::prelude::*;
use dioxus_router::{use_route, Link, Outlet, Routable, Router};

use crate::config::SiteConfig;
use crate::contact::ContactSection;
use crate::counter::{LabelCounter, SkillBar, StatCounter};
use crate::date::current_year;
use crate::filter::ProjectsGrid;
use crate::image_fallback::{FallbackImage, PROFILE_IMAGE_ID};
use crate::navigation::{use_pending_anchor_scroll, NavBar, PendingAnchor};
use crate::notification::{NotificationCenter, NotificationTray};
use crate::reveal::{Reveal, TypingHeadline};
use crate::scroll::ScrollToTop;
use crate::slider::ProjectsSlider;
use crate::submission::{SimulatedSubmitter, SubmitterHandle};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

const SKILLS: &[(&str, u8)] = &[
    ("HTML & CSS", 90),
    ("JavaScript", 85),
    ("Rust", 75),
    ("Python", 80),
    ("SQL", 70),
];

const TIMELINE: &[(&str, &str, &str)] = &[
    ("2024 - Present", "Freelance Developer", "Building web apps and tooling for small teams."),
    ("2022 - 2024", "Frontend Engineer", "Shipped dashboards and design systems for a fintech product."),
    ("2020 - 2022", "Junior Developer", "Maintained internal tools and automated reporting."),
    ("2019", "Computer Science Degree", "Graduated with a focus on software engineering."),
];

const SERVICES: &[(&str, &str, &str)] = &[
    ("fas fa-code", "Web Development", "Responsive sites and web apps, from landing pages to dashboards."),
    ("fas fa-mobile-alt", "Mobile Apps", "Cross-platform apps with a shared codebase."),
    ("fas fa-chart-line", "Data Work", "Pipelines, reports and visualisations that answer real questions."),
    ("fas fa-tools", "Tooling", "CLIs and automation that take the busywork out of a workflow."),
];

#[component]
pub fn App() -> Element {
    let config = use_hook(SiteConfig::load);
    let submitter = SimulatedSubmitter {
        delay_ms: config.timings.submit_delay_ms,
        fail_with: config.simulated_delivery_error.clone(),
    };
    use_context_provider(|| config);
    use_context_provider(|| Signal::new(NotificationCenter::default()));
    use_context_provider(|| SubmitterHandle::new(submitter));
    use_context_provider(|| PendingAnchor(Signal::new(None)));

    #[cfg(target_arch = "wasm32")]
    use_hook(crate::install_error_logging);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Meta { name: "theme-color", content: "#2563eb" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/projects")]
    Projects {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let config = use_context::<SiteConfig>();
    let year = current_year();

    rsx! {
        NavBar { path }
        main { Outlet::<Route> {} }
        footer { class: "footer",
            div { class: "container",
                p {
                    "© "
                    span { class: "current-year", "{year}" }
                    " {config.owner_name}. All rights reserved."
                }
            }
        }
        ScrollToTop {}
        NotificationTray {}
    }
}

#[component]
fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    use_pending_anchor_scroll(config.scroll.header_offset);
    let headline = format!("Hi, I'm {}", config.owner_name);
    rsx! {
        document::Title { "{config.owner_name} | Portfolio" }
        section { id: "home", class: "hero",
            div { class: "container hero-content",
                div { class: "hero-text",
                    TypingHeadline { text: headline }
                    p { class: "hero-subtitle", "{config.tagline}" }
                    div { class: "hero-buttons",
                        Link { to: Route::Projects {}, class: "btn btn-primary", "View My Work" }
                        Link { to: Route::About {}, class: "btn btn-secondary", "More About Me" }
                    }
                }
                div { class: "hero-image",
                    FallbackImage {
                        src: "/assets/images/profile.jpg".to_string(),
                        alt: config.owner_name.clone(),
                        id: Some(PROFILE_IMAGE_ID.to_string()),
                        class: Some("profile-img".to_string()),
                    }
                }
            }
        }
        section { id: "about", class: "about-preview",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                Reveal { class: "about-text".to_string(),
                    p {
                        "I build fast, accessible web experiences and the tools behind them. "
                        "Most days that means Rust, TypeScript and a lot of careful CSS."
                    }
                    Link { to: Route::About {}, class: "btn btn-secondary", "Read My Story" }
                }
            }
        }
        section { id: "skills", class: "skills",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (name, level) in SKILLS.iter() {
                        Reveal { key: "{name}", class: "skill-card".to_string(),
                            SkillBar { name: name.to_string(), level: *level }
                        }
                    }
                }
            }
        }
        section { id: "projects", class: "projects",
            div { class: "container",
                h2 { class: "section-title", "Featured Projects" }
                ProjectsSlider {}
                div { class: "projects-cta",
                    Link { to: Route::Projects {}, class: "btn btn-primary", "View All Projects" }
                }
            }
        }
        ContactSection {}
    }
}

#[component]
fn About() -> Element {
    let config = use_context::<SiteConfig>();
    rsx! {
        document::Title { "About | {config.owner_name}" }
        section { id: "about-hero", class: "page-hero",
            div { class: "container",
                h1 { "About Me" }
                p { "{config.tagline}" }
            }
        }
        section { id: "story", class: "story",
            div { class: "container story-grid",
                Reveal { class: "story-text".to_string(),
                    h2 { "My Story" }
                    p {
                        "I started out automating spreadsheets and never stopped. "
                        "These days I design and build products end to end."
                    }
                }
                div { class: "about-stats",
                    LabelCounter { label: "5+".to_string(), caption: "Years Experience".to_string() }
                    LabelCounter { label: "50+".to_string(), caption: "Projects Completed".to_string() }
                    LabelCounter { label: "30+".to_string(), caption: "Happy Clients".to_string() }
                }
            }
        }
        section { id: "timeline", class: "timeline-section",
            div { class: "container",
                h2 { class: "section-title", "Journey" }
                div { class: "timeline",
                    for (period, title, body) in TIMELINE.iter() {
                        Reveal { key: "{period}", class: "timeline-item".to_string(),
                            span { class: "timeline-date", "{period}" }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
        section { id: "services", class: "services",
            div { class: "container",
                h2 { class: "section-title", "What I Do" }
                div { class: "services-grid",
                    for (icon, title, body) in SERVICES.iter() {
                        Reveal { key: "{title}", class: "service-card".to_string(),
                            i { class: *icon }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    let config = use_context::<SiteConfig>();
    rsx! {
        document::Title { "Projects | {config.owner_name}" }
        section { id: "projects-hero", class: "page-hero",
            div { class: "container",
                h1 { "My Projects" }
                p { "A selection of things I have built, broken and rebuilt." }
            }
        }
        section { id: "all-projects", class: "projects-page",
            div { class: "container",
                ProjectsGrid {}
            }
        }
        section { id: "project-stats", class: "project-stats",
            div { class: "container stats-grid",
                StatCounter { target: 13, caption: "Projects Shipped".to_string() }
                StatCounter { target: 1500, caption: "Commits This Year".to_string() }
                StatCounter { target: 25000, caption: "Lines of Code".to_string() }
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    tracing::debug!("router: no page for /{path}");
    rsx! {
        document::Title { "Not Found" }
        section { class: "not-found",
            div { class: "container",
                h1 { "404" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back Home" }
            }
        }
    }
}
