use leptos::prelude::*;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="section benefits">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why Petal"</p>
                    <h2 class="section-title">"Everything you need, nothing you don't"</h2>
                </div>
                <div class="benefits-grid">
                    <BenefitCard
                        icon="🌿"
                        title="Clean formulas"
                        description="Every product is vegan, cruelty-free and free of the usual suspects."
                    />
                    <BenefitCard
                        icon="📦"
                        title="Full-size products"
                        description="No sample sachets. Four to six full-size items in every box."
                    />
                    <BenefitCard
                        icon="✨"
                        title="Picked for you"
                        description="A short skin quiz tunes each box to what your routine is missing."
                    />
                    <BenefitCard
                        icon="↺"
                        title="Skip or cancel anytime"
                        description="Pause a month from your account page. No calls, no forms."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="benefit-card">
            <div class="benefit-icon">{icon}</div>
            <h3 class="benefit-title">{title}</h3>
            <p class="benefit-description">{description}</p>
        </div>
    }
}
