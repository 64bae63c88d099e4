use dioxus::prelude::*;

use crate::hooks::{sleep_ms, use_first_intersection, FirstIntersection};

const COUNTER_THRESHOLD: f64 = 0.5;
const SKILL_BAR_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFormat {
    /// `current` followed by whatever non-digit text the label carried.
    Plain,
    /// 1000 and up collapse to a "K" figure.
    Compact,
}

/// Counts from zero to `target` in equal increments, one per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    suffix: String,
    format: CounterFormat,
    step_ms: u32,
    done: bool,
}

impl CounterAnimation {
    /// Parses labels such as `"50+"` or `"3 yrs"`: every digit forms the
    /// target, everything else is kept as the suffix. Returns `None` when the
    /// label has no digits.
    pub fn from_label(label: &str) -> Option<Self> {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix: String = label.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self::new(target, 50, 50, suffix, CounterFormat::Plain))
    }

    pub fn compact(target: u64) -> Self {
        Self::new(target, 100, 20, String::new(), CounterFormat::Compact)
    }

    fn new(target: u64, steps: u32, step_ms: u32, suffix: String, format: CounterFormat) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(steps),
            current: 0.0,
            suffix,
            format,
            step_ms,
            done: false,
        }
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one increment and returns the text to display.
    pub fn tick(&mut self) -> String {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.done = true;
            }
        }
        let value = if self.done {
            self.target
        } else {
            self.current.floor() as u64
        };
        self.render(value)
    }

    pub fn render(&self, value: u64) -> String {
        match self.format {
            CounterFormat::Plain => format!("{value}{}", self.suffix),
            CounterFormat::Compact => format_compact(value),
        }
    }
}

/// `1500 -> "1.5K"`, `12345 -> "12K"`, below 1000 unchanged.
///
/// Rounds like `Number.prototype.toFixed`: the decimal digit comes from the
/// binary value of `value / 1000`, so `1150` (1.149999...) shows as `1.1K`,
/// and exact halves round up.
pub fn format_compact(value: u64) -> String {
    if value >= 10_000 {
        return format!("{}K", (value + 500) / 1000);
    }
    if value >= 1000 {
        // x.25 and x.75 are the only exact ties; `{:.1}` would send them to even.
        if matches!(value % 1000, 250 | 750) {
            let tenths = (value + 50) / 100;
            return format!("{}.{}K", tenths / 10, tenths % 10);
        }
        return format!("{:.1}K", value as f64 / 1000.0);
    }
    value.to_string()
}

pub fn skill_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

/// Drives a counter to completion, one tick per `step_ms`.
fn use_counter(animation: Option<CounterAnimation>, initial: String) -> (Signal<String>, FirstIntersection) {
    let mut text = use_signal(|| initial);
    let trigger = use_first_intersection(COUNTER_THRESHOLD, "0px");
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !trigger.seen() || *started.peek() {
            return;
        }
        started.set(true);
        let Some(mut animation) = animation.clone() else {
            return;
        };
        spawn(async move {
            while !animation.is_done() {
                sleep_ms(animation.step_ms()).await;
                text.set(animation.tick());
            }
        });
    });

    (text, trigger)
}

/// Counter whose target is written out in the label itself, e.g. `"5+"`.
#[component]
pub fn LabelCounter(label: String, caption: String) -> Element {
    let animation = CounterAnimation::from_label(&label);
    let (text, trigger) = use_counter(animation, label.clone());
    rsx! {
        div { class: "stat-item",
            span { class: "stat-number", onmounted: move |event| trigger.on_mounted(event), "{text}" }
            span { class: "stat-label", "{caption}" }
        }
    }
}

/// Counter with an explicit numeric target, shown in compact "K" form.
#[component]
pub fn StatCounter(target: u64, caption: String) -> Element {
    let (text, trigger) = use_counter(Some(CounterAnimation::compact(target)), "0".to_string());
    rsx! {
        div { class: "stat-item",
            span {
                class: "stat-number",
                "data-target": "{target}",
                onmounted: move |event| trigger.on_mounted(event),
                "{text}"
            }
            span { class: "stat-label", "{caption}" }
        }
    }
}

#[component]
pub fn SkillBar(name: String, level: u8) -> Element {
    let trigger = use_first_intersection(COUNTER_THRESHOLD, "0px");
    let mut width = use_signal(|| "0%".to_string());
    let mut scheduled = use_signal(|| false);

    use_effect(move || {
        if !trigger.seen() || *scheduled.peek() {
            return;
        }
        scheduled.set(true);
        spawn(async move {
            sleep_ms(SKILL_BAR_DELAY_MS).await;
            width.set(skill_width(level));
        });
    });

    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { "{name}" }
                span { "{level}%" }
            }
            div { class: "skill-track",
                div {
                    class: "skill-bar",
                    "data-level": "{level}",
                    style: "width: {width}",
                    onmounted: move |event| trigger.on_mounted(event),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_end(mut animation: CounterAnimation) -> (Vec<String>, usize) {
        let mut frames = Vec::new();
        while !animation.is_done() {
            frames.push(animation.tick());
            assert!(frames.len() <= 1000, "counter never finished");
        }
        let ticks = frames.len();
        (frames, ticks)
    }

    #[test]
    fn label_parsing_keeps_suffix() {
        let animation = CounterAnimation::from_label("50+").unwrap();
        assert_eq!(animation.render(7), "7+");
        let (frames, ticks) = run_to_end(animation);
        assert_eq!(frames.first().map(String::as_str), Some("1+"));
        assert_eq!(frames.last().map(String::as_str), Some("50+"));
        assert_eq!(ticks, 50);
    }

    #[test]
    fn label_without_digits_does_not_animate() {
        assert!(CounterAnimation::from_label("many").is_none());
        assert!(CounterAnimation::from_label("").is_none());
    }

    #[test]
    fn counter_is_monotonic_and_ends_on_target() {
        let (frames, _) = run_to_end(CounterAnimation::compact(250));
        let values: Vec<u64> = frames.iter().map(|frame| frame.parse().unwrap()).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values.last(), Some(&250));
    }

    #[test]
    fn compact_counter_formats_thousands() {
        let (frames, ticks) = run_to_end(CounterAnimation::compact(15_000));
        assert_eq!(ticks, 100);
        assert_eq!(frames.last().map(String::as_str), Some("15K"));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::compact(0);
        assert_eq!(animation.tick(), "0");
        assert!(animation.is_done());
    }

    #[test]
    fn format_compact_thresholds() {
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1000), "1.0K");
        assert_eq!(format_compact(1250), "1.3K");
        assert_eq!(format_compact(9_999), "10.0K");
        assert_eq!(format_compact(10_000), "10K");
        assert_eq!(format_compact(12_345), "12K");
    }

    #[test]
    fn format_compact_rounds_like_to_fixed() {
        assert_eq!(format_compact(1150), "1.1K");
        assert_eq!(format_compact(1050), "1.1K");
        assert_eq!(format_compact(1350), "1.4K");
        assert_eq!(format_compact(1750), "1.8K");
        assert_eq!(format_compact(9_950), "9.9K");
        assert_eq!(format_compact(12_500), "13K");
    }

    #[test]
    fn skill_width_is_clamped() {
        assert_eq!(skill_width(85), "85%");
        assert_eq!(skill_width(140), "100%");
    }
}
