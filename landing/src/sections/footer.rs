use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="footer" class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"✿"</span>
                    <span class="footer-title">"petal"</span>
                </div>
                <div class="footer-links">
                    <a href="#faq" class="footer-link">"FAQ"</a>
                    <a href="/terms" class="footer-link">"Terms"</a>
                    <a href="/privacy" class="footer-link">"Privacy"</a>
                    <a href="mailto:hello@petal.shop" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">"© 2026 Petal Boxes. Made with care."</p>
            </div>
        </footer>
    }
}
