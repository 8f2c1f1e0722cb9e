use leptos::prelude::*;

/// Sticky header. Stickiness is CSS; the active-link highlight is wired by
/// the scroll behaviors and keyed on these `href`s.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="header-inner">
                <a href="#hero" class="header-brand">
                    <span class="header-logo">"✿"</span>
                    <span class="header-title">"petal"</span>
                </a>
                <ul class="header-links">
                    <li><a href="#benefits">"Why Petal"</a></li>
                    <li><a href="#faq">"FAQ"</a></li>
                    <li><a href="#cta">"Get 10% Off"</a></li>
                </ul>
            </nav>
        </header>
    }
}
