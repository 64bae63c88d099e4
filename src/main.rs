mod config;
mod contact;
mod counter;
mod date;
mod filter;
mod hooks;
mod image_fallback;
mod navigation;
mod notification;
mod projects;
mod reveal;
mod routes;
mod scroll;
mod slider;
mod submission;
mod validation;

fn main() {
    dioxus::launch(routes::App);
}

/// Logs a welcome banner and routes uncaught errors and unhandled promise
/// rejections to `tracing::error!`. Nothing is shown to the visitor.
#[cfg(target_arch = "wasm32")]
fn install_error_logging() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    tracing::info!(
        "{} v{}: thanks for looking under the hood",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |event: web_sys::ErrorEvent| {
        tracing::error!("global error: {} ({}:{})", event.message(), event.filename(), event.lineno());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_ok()
    {
        on_error.forget();
    }

    let on_rejection = Closure::wrap(Box::new(move |event: web_sys::PromiseRejectionEvent| {
        tracing::error!("unhandled promise rejection: {:?}", event.reason());
        event.prevent_default();
    }) as Box<dyn FnMut(web_sys::PromiseRejectionEvent)>);
    if window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
        .is_ok()
    {
        on_rejection.forget();
    }
}
