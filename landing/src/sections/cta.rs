//! Lead-capture form.
//!
//! Validation runs on submit only. A valid email starts the subscription
//! task; the submit button mirrors its [`SubmitPhase`] until the control is
//! ready again.

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::interactions::{
    run_submission, validate_email, BrowserTimer, Lead, SimulatedSink, SubmitPhase,
};

#[component]
pub fn CallToAction() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let subscriber_name = config.subscriber_name.clone();

    let form_ref = NodeRef::<leptos::html::Form>::new();
    let email_ref = NodeRef::<leptos::html::Input>::new();

    let (error, set_error) = signal(None::<String>);
    let (invalid, set_invalid) = signal(false);
    let (phase, set_phase) = signal(SubmitPhase::Ready);
    let (confirmation, set_confirmation) = signal(None::<String>);

    let on_submit = {
        let subscriber_name = subscriber_name.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if phase.get_untracked().is_disabled() {
                return;
            }
            let Some(input) = email_ref.get_untracked() else {
                log::error!("[cta] email field is not mounted");
                return;
            };

            let raw = input.value();
            let email = match validate_email(&raw) {
                Ok(email) => email.to_string(),
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_invalid.set(true);
                    let _ = input.focus();
                    return;
                }
            };

            set_error.set(None);
            set_invalid.set(false);
            set_confirmation.set(None);

            let lead = Lead::new(subscriber_name.clone(), email);
            let submit_delay = config.submit_delay();
            let reset_delay = config.reset_delay();

            leptos::task::spawn_local(async move {
                let sink = SimulatedSink::new(BrowserTimer, submit_delay);
                let outcome = run_submission(
                    &sink,
                    &BrowserTimer,
                    reset_delay,
                    lead,
                    move |next| set_phase.set(next),
                    move |confirmed| {
                        set_confirmation.set(Some(confirmed.message()));
                        if let Some(form) = form_ref.get_untracked() {
                            form.reset();
                        }
                    },
                )
                .await;

                match outcome {
                    Ok(confirmed) => log::info!("[cta] subscribed {}", confirmed.email),
                    Err(err) => {
                        log::warn!("[cta] {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <section id="cta" class="section cta">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Your first box"</p>
                    <h2 class="section-title">"Get 10% off your first box"</h2>
                    <p class="section-description">
                        "Leave your email and we'll send your code right away. No spam, unsubscribe anytime."
                    </p>
                </div>
                <form class="cta-form" node_ref=form_ref on:submit=on_submit novalidate=true>
                    <input type="hidden" id="name_placeholder" name="name" value=subscriber_name />
                    <label for="email" class="visually-hidden">"Email address"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        node_ref=email_ref
                        class:error=move || invalid.get()
                        aria-invalid=move || if invalid.get() { "true" } else { "false" }
                        aria-describedby="email-error"
                    />
                    <span
                        id="email-error"
                        class="error-message"
                        style="color: red; font-size: 0.85rem; display: block;"
                    >
                        {move || error.get().unwrap_or_default()}
                    </span>
                    <button
                        type="submit"
                        class="button submit-cta"
                        disabled=move || phase.get().is_disabled()
                    >
                        {move || phase.get().label()}
                    </button>
                </form>
                <Show when=move || confirmation.get().is_some()>
                    <p class="form-confirmation" role="status">
                        {move || confirmation.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </section>
    }
}
