use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="section hero">
            <div class="container">
                <div class="hero-content">
                    <p class="hero-badge">"Monthly self-care, delivered"</p>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"Small rituals,"</span>
                        <br />
                        "big glow."
                    </h1>
                    <p class="hero-description">
                        "A curated box of clean skincare and slow-living treats, "
                        "picked for you and shipped on the first of every month."
                    </p>
                    <div class="hero-actions">
                        <a href="#cta" class="button">"Claim 10% Off"</a>
                        <a href="#benefits" class="link">"See what's inside →"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
