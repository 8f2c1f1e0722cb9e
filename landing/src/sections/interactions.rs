//! Mount point for the scroll, navigation and accordion behaviors.

use leptos::prelude::*;

use crate::behaviors;
use crate::config::LandingConfig;

/// Install page behaviors once the page has mounted.
///
/// Renders nothing. Place it after the sections it enhances.
#[component]
#[allow(clippy::unused_unit)]
pub fn Interactions() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            log::error!("[behaviors] no window, skipping setup");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("[behaviors] no document, skipping setup");
            return;
        };
        behaviors::install(&window, &document, &config);
    });

    view! {}
}
