use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;

use crate::config::SiteConfig;

pub const PROFILE_IMAGE_ID: &str = "profile-img";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackIcon {
    Profile,
    Project,
}

impl FallbackIcon {
    pub fn icon_class(self) -> &'static str {
        match self {
            FallbackIcon::Profile => "fas fa-user",
            FallbackIcon::Project => "fas fa-laptop-code",
        }
    }

    pub fn container_class(self) -> &'static str {
        match self {
            FallbackIcon::Profile => "image-fallback profile-fallback",
            FallbackIcon::Project => "image-fallback project-fallback",
        }
    }
}

/// Decides which placeholder replaces a broken image. Images that are
/// neither the profile photo nor a project thumbnail are left alone.
pub fn classify_image(id: Option<&str>, alt: &str, src: &str, owner_name: &str) -> Option<FallbackIcon> {
    let is_profile =
        id == Some(PROFILE_IMAGE_ID) || (!owner_name.is_empty() && alt.contains(owner_name));
    if is_profile {
        return Some(FallbackIcon::Profile);
    }
    if src.contains("project") {
        return Some(FallbackIcon::Project);
    }
    None
}

#[component]
pub fn FallbackImage(src: String, alt: String, id: Option<String>, class: Option<String>) -> Element {
    let config = use_context::<SiteConfig>();
    let mut failed = use_signal(|| false);
    let fallback = classify_image(id.as_deref(), &alt, &src, &config.owner_name);

    if failed() {
        if let Some(icon) = fallback {
            return rsx! {
                div { class: icon.container_class(), role: "img", aria_label: "{alt}",
                    i { class: icon.icon_class() }
                }
            };
        }
    }

    let mut mark_failed = move || {
        if !failed() {
            tracing::debug!("image failed to load, using placeholder");
            failed.set(true);
        }
    };

    rsx! {
        img {
            id: id.clone(),
            class: class.clone(),
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| mark_failed(),
            // An image can already be broken before hydration attaches onerror.
            onmounted: move |_event| {
                #[cfg(target_arch = "wasm32")]
                {
                    use wasm_bindgen::JsCast;
                    let element = _event.data.as_ref().as_web_event();
                    if let Ok(image) = element.dyn_into::<web_sys::HtmlImageElement>() {
                        if image.complete() && image.natural_height() == 0 {
                            mark_failed();
                        }
                    }
                }
            },
        }
    }
}
