use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    Document,
}

#[cfg(target_arch = "wasm32")]
pub struct GlobalListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl GlobalListener {
    fn attach<F>(target: ListenerTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = web_sys::window()?;
        let target: web_sys::EventTarget = match target {
            ListenerTarget::Window => window.into(),
            ListenerTarget::Document => window.document()?.into(),
        };
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!("listener: attach {event}");
        Some(Self {
            target,
            event,
            closure,
        })
    }

    fn detach(&self) {
        tracing::debug!("listener: detach {}", self.event);
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribes to a window/document event for the lifetime of the calling
/// component. The handler passed on the first render is the one kept.
pub fn use_global_listener<F>(target: ListenerTarget, event: &'static str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || GlobalListener::attach(target, event, handler).map(Rc::new));
        use_drop(move || {
            if let Some(listener) = listener.as_ref() {
                listener.detach();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (target, event, handler);
    }
}

/// Tracks `window.scrollY`, updated on every scroll event.
pub fn use_scroll_y() -> Signal<f64> {
    let mut scroll_y = use_signal(current_scroll_y);
    use_global_listener(ListenerTarget::Window, "scroll", move |_event| {
        scroll_y.set(current_scroll_y());
    });
    scroll_y
}

pub fn current_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

/// One-way visibility latch fed by an IntersectionObserver.
#[derive(Clone, Copy)]
pub struct FirstIntersection {
    seen: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    element: Signal<Option<web_sys::Element>>,
}

impl FirstIntersection {
    pub fn seen(&self) -> bool {
        (self.seen)()
    }

    pub fn on_mounted(&self, _event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            let mut element = self.element;
            element.set(Some(_event.data.as_ref().as_web_event()));
        }
    }
}

/// Flips to `true` the first time the mounted element crosses `threshold`
/// (fraction visible) and never flips back. The observer is released as
/// soon as that happens, or when the component unmounts.
pub fn use_first_intersection(threshold: f64, root_margin: &'static str) -> FirstIntersection {
    let seen = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    {
        let element = use_signal(|| None::<web_sys::Element>);
        let mut handle = use_signal(|| None::<ObserverHandle>);

        use_effect(move || {
            let Some(target) = element() else {
                return;
            };
            if handle.peek().is_some() || *seen.peek() {
                return;
            }
            match observe_once(&target, threshold, root_margin, seen) {
                Ok(observer) => handle.set(Some(observer)),
                Err(err) => {
                    tracing::warn!("intersection observer unavailable: {err:?}");
                    let mut seen = seen;
                    seen.set(true);
                }
            }
        });

        use_drop(move || {
            if let Some(handle) = handle.peek().as_ref() {
                handle.observer.disconnect();
            }
        });

        return FirstIntersection { seen, element };
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (threshold, root_margin);
        FirstIntersection { seen }
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_once(
    target: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    mut seen: Signal<bool>,
) -> Result<ObserverHandle, JsValue> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    seen.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        web_sys::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    Ok(ObserverHandle {
        observer,
        _closure: closure,
    })
}
