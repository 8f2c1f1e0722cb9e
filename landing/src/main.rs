// Petal Landing Page — Leptos 0.8 CSR
// Developed by the Petal web team (c)2026

use leptos::prelude::*;
use petal_landing::LandingConfig;
use petal_landing::sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {err}")));
    }
    leptos::mount::mount_to_body(App);
}

/// Debug builds log everything; release builds drop per-behavior chatter.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[component]
fn App() -> impl IntoView {
    let config = web_sys::window()
        .and_then(|window| window.document())
        .map(|document| LandingConfig::from_document(&document))
        .unwrap_or_default();
    provide_context(config);

    view! {
        <Header />
        <main>
            <Hero />
            <Benefits />
            <Faq />
            <CallToAction />
        </main>
        <Footer />
        <Interactions />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_keep_debug_logs() {
        assert_eq!(log_level(), log::Level::Debug);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn release_builds_stop_at_info() {
        assert_eq!(log_level(), log::Level::Info);
    }
}
