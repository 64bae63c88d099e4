use dioxus::prelude::*;
use thiserror::Error;

use crate::hooks::{sleep_ms, use_global_listener, ListenerTarget};
use crate::image_fallback::FallbackImage;
use crate::projects::{featured_slides, Project};
use crate::reveal::{reveal_class, use_reveal};

pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
const ENTER_DELAY_MS: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("slider has no slides")]
    Empty,
    #[error("slide {index} is out of range (0..{count})")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderCommand {
    Next,
    Prev,
    GoTo(usize),
}

/// Index into a fixed, non-empty run of slides. No wraparound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    count: usize,
}

impl SliderState {
    pub fn new(count: usize) -> Result<Self, SliderError> {
        if count == 0 {
            return Err(SliderError::Empty);
        }
        Ok(Self { current: 0, count })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.count
    }

    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), SliderError> {
        if index >= self.count {
            return Err(SliderError::OutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn apply(&mut self, command: SliderCommand) -> Result<bool, SliderError> {
        match command {
            SliderCommand::Next => Ok(self.next()),
            SliderCommand::Prev => Ok(self.prev()),
            SliderCommand::GoTo(index) => {
                let before = self.current;
                self.go_to(index)?;
                Ok(before != index)
            }
        }
    }

    pub fn dot_active(&self) -> Vec<bool> {
        (0..self.count).map(|index| index == self.current).collect()
    }
}

pub fn command_for_key(key: &str) -> Option<SliderCommand> {
    match key {
        "ArrowLeft" => Some(SliderCommand::Prev),
        "ArrowRight" => Some(SliderCommand::Next),
        _ => None,
    }
}

/// Horizontal swipe detection on raw screen X. Vertical movement is not
/// looked at, so a mostly-vertical drag with enough sideways drift still
/// counts as a swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f64) -> Option<SliderCommand> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if diff > 0.0 {
            Some(SliderCommand::Next)
        } else {
            Some(SliderCommand::Prev)
        }
    }
}

#[component]
pub fn ProjectsSlider() -> Element {
    let slides = use_hook(|| featured_slides(3));
    let Ok(initial) = SliderState::new(slides.len()) else {
        tracing::debug!("slider: no featured projects, skipping");
        return rsx! {};
    };
    let mut state = use_signal(|| initial);
    let mut swipe = use_signal(SwipeTracker::default);
    let mut entered = use_signal(|| false);

    // Replays the fade/slide-in whenever the index changes, including the first render.
    use_effect(move || {
        let _ = state().current_index();
        entered.set(false);
        spawn(async move {
            sleep_ms(ENTER_DELAY_MS).await;
            entered.set(true);
        });
    });

    let mut run = move |command: SliderCommand| {
        let mut next = *state.peek();
        match next.apply(command) {
            Ok(true) => state.set(next),
            Ok(false) => {}
            Err(err) => tracing::warn!("slider: {err}"),
        }
    };

    use_global_listener(ListenerTarget::Document, "keydown", move |_event| {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let Ok(event) = _event.dyn_into::<web_sys::KeyboardEvent>() else {
                return;
            };
            if let Some(command) = command_for_key(&event.key()) {
                run(command);
            }
        }
    });

    let current = state().current_index();
    let position = slide_position_label(&state());
    let slide_class = if entered() {
        "projects-slide slide-active"
    } else {
        "projects-slide slide-enter"
    };
    let dots: Vec<(usize, bool, String)> = state()
        .dot_active()
        .into_iter()
        .enumerate()
        .map(|(index, active)| (index, active, format!("Go to slide {}", index + 1)))
        .collect();

    rsx! {
        div { class: "projects-slider-wrapper",
            div {
                id: "projects-slider",
                class: "projects-slider",
                role: "region",
                aria_label: "{position}",
                ontouchstart: move |event: TouchEvent| {
                    if let Some(x) = first_touch_x(&event) {
                        swipe.write().begin(x);
                    }
                },
                ontouchend: move |event: TouchEvent| {
                    let Some(x) = first_touch_x(&event) else {
                        return;
                    };
                    let command = swipe.write().end(x);
                    if let Some(command) = command {
                        run(command);
                    }
                },
                if let Some(slide) = slides.get(current) {
                    div { key: "{current}", class: "{slide_class}",
                        for project in slide.iter() {
                            SlideCard { project: *project }
                        }
                    }
                }
            }
            div { class: "slider-controls",
                button {
                    id: "prev-btn",
                    class: "slider-btn",
                    aria_label: "Previous projects",
                    disabled: !state().can_go_prev(),
                    onclick: move |_| run(SliderCommand::Prev),
                    i { class: "fas fa-chevron-left" }
                }
                div { id: "slider-dots", class: "slider-dots",
                    for (index, active, label) in dots {
                        button {
                            key: "{index}",
                            class: if active { "slider-dot active" } else { "slider-dot" },
                            aria_label: "{label}",
                            onclick: move |_| run(SliderCommand::GoTo(index)),
                        }
                    }
                }
                button {
                    id: "next-btn",
                    class: "slider-btn",
                    aria_label: "Next projects",
                    disabled: !state().can_go_next(),
                    onclick: move |_| run(SliderCommand::Next),
                    i { class: "fas fa-chevron-right" }
                }
            }
        }
    }
}

/// `"Slide 2 of 3"`, announced on the slider region.
pub fn slide_position_label(state: &SliderState) -> String {
    format!("Slide {} of {}", state.current_index() + 1, state.slide_count())
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches_changed()
        .first()
        .map(|touch| touch.screen_coordinates().x)
}

#[component]
fn SlideCard(project: &'static Project) -> Element {
    let trigger = use_reveal();
    let class = reveal_class("project-card slide-card", trigger.seen());
    rsx! {
        article { class: "{class}", onmounted: move |event| trigger.on_mounted(event),
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
