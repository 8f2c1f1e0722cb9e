use leptos::prelude::*;

/// (question, answer, open on first render)
const QUESTIONS: &[(&str, &str, bool)] = &[
    (
        "What's in a Petal box?",
        "Four to six full-size skincare and self-care products, chosen from independent \
         brands. Every box has a cleanser or mask, a treatment, and at least one treat.",
        true,
    ),
    (
        "How does the 10% discount work?",
        "Sign up below and we'll email you a one-time code. It applies to your first box, \
         monthly or annual.",
        false,
    ),
    (
        "Can I skip a month?",
        "Yes. Skip or pause from your account page any time before the 25th and you won't \
         be charged for the next box.",
        false,
    ),
    (
        "Do you ship internationally?",
        "We ship to the EU, the UK and North America. Shipping is free on annual plans.",
        false,
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="section faq">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"FAQ"</p>
                    <h2 class="section-title">"Questions, answered"</h2>
                </div>
                <div class="faq-list">
                    {QUESTIONS
                        .iter()
                        .map(|&(question, answer, open)| {
                            view! { <FaqItem question=question answer=answer open=open /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Native disclosure; height animation and `aria-expanded` are wired by the
/// accordion behavior.
#[component]
fn FaqItem(question: &'static str, answer: &'static str, open: bool) -> impl IntoView {
    view! {
        <details class="faq-item" open=open>
            <summary class="faq-question">{question}</summary>
            <p class="faq-answer">{answer}</p>
        </details>
    }
}
