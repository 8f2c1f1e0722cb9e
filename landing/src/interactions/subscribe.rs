//! Lead subscription flow behind the call-to-action form.
//!
//! The page has no backend: [`SimulatedSink`] stands in for a network call
//! by sleeping and then accepting the lead. [`run_submission`] drives the
//! submit control through its phases around whatever sink it is given, so
//! the observable timing stays the same when a real sink replaces it.

use std::future::Future;
use std::time::Duration;

/// Async sleep. The browser implementation is [`BrowserTimer`]; tests use a
/// recording timer that resolves immediately.
pub trait Timer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Timer backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(delay)
    }
}

/// A visitor signing up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
}

impl Lead {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Accepted subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
}

impl Confirmation {
    pub fn message(&self) -> String {
        format!(
            "Thank you for subscribing, {}! Your 10% off code has been sent to {}.",
            self.name, self.email
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeError {
    #[error("Subscription failed: {0}")]
    Rejected(String),
}

/// Where leads go.
pub trait LeadSink {
    fn subscribe(&self, lead: &Lead)
    -> impl Future<Output = Result<Confirmation, SubscribeError>>;
}

/// Accepts every lead after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSink<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSink<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl<T: Timer> LeadSink for SimulatedSink<T> {
    fn subscribe(
        &self,
        lead: &Lead,
    ) -> impl Future<Output = Result<Confirmation, SubscribeError>> {
        let confirmation = Confirmation {
            name: lead.name.clone(),
            email: lead.email.clone(),
        };
        async move {
            self.timer.sleep(self.delay).await;
            Ok(confirmation)
        }
    }
}

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Ready,
    Subscribing,
    Subscribed,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Get My 10% Off Code",
            Self::Subscribing => "Subscribing...",
            Self::Subscribed => "Subscribed!",
        }
    }

    pub fn is_disabled(self) -> bool {
        self != Self::Ready
    }
}

/// Run one validated submission.
///
/// Phases reported through `on_phase`:
/// `Subscribing` -> (sink resolves) -> `Subscribed` -> (`reset_delay`) -> `Ready`.
/// `on_confirmed` runs between the sink resolving and the `Subscribed`
/// phase; that is where the form shows the confirmation and resets its
/// fields. A failed sink goes straight back to `Ready`.
pub async fn run_submission<S, T>(
    sink: &S,
    timer: &T,
    reset_delay: Duration,
    lead: Lead,
    mut on_phase: impl FnMut(SubmitPhase),
    on_confirmed: impl FnOnce(&Confirmation),
) -> Result<Confirmation, SubscribeError>
where
    S: LeadSink,
    T: Timer,
{
    on_phase(SubmitPhase::Subscribing);

    let confirmation = match sink.subscribe(&lead).await {
        Ok(confirmation) => confirmation,
        Err(err) => {
            on_phase(SubmitPhase::Ready);
            return Err(err);
        }
    };

    on_confirmed(&confirmation);
    on_phase(SubmitPhase::Subscribed);

    timer.sleep(reset_delay).await;
    on_phase(SubmitPhase::Ready);

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Step {
        Phase(&'static str, bool),
        Sleep(u64),
        Confirmed(String),
    }

    type Log = Rc<RefCell<Vec<Step>>>;

    struct RecordingTimer(Log);

    impl Timer for RecordingTimer {
        fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
            self.0.borrow_mut().push(Step::Sleep(delay.as_millis() as u64));
            std::future::ready(())
        }
    }

    struct RejectingSink;

    impl LeadSink for RejectingSink {
        fn subscribe(
            &self,
            _lead: &Lead,
        ) -> impl Future<Output = Result<Confirmation, SubscribeError>> {
            std::future::ready(Err(SubscribeError::Rejected("list closed".into())))
        }
    }

    fn run(sink: &impl LeadSink, log: &Log, email: &str) -> Result<Confirmation, SubscribeError> {
        let timer = RecordingTimer(log.clone());
        let phases = log.clone();
        let confirmed = log.clone();
        block_on(run_submission(
            sink,
            &timer,
            Duration::from_millis(2000),
            Lead::new("Subscriber", email),
            move |phase| {
                phases
                    .borrow_mut()
                    .push(Step::Phase(phase.label(), phase.is_disabled()))
            },
            move |c| confirmed.borrow_mut().push(Step::Confirmed(c.message())),
        ))
    }

    #[test]
    fn simulated_submission_follows_timing_contract() {
        let log: Log = Rc::default();
        let sink = SimulatedSink::new(RecordingTimer(log.clone()), Duration::from_millis(1000));

        let confirmation = run(&sink, &log, "ok@example.com").unwrap();

        assert_eq!(confirmation.email, "ok@example.com");
        assert_eq!(
            *log.borrow(),
            vec![
                Step::Phase("Subscribing...", true),
                Step::Sleep(1000),
                Step::Confirmed(
                    "Thank you for subscribing, Subscriber! Your 10% off code has been sent to ok@example.com."
                        .to_string()
                ),
                Step::Phase("Subscribed!", true),
                Step::Sleep(2000),
                Step::Phase("Get My 10% Off Code", false),
            ]
        );
    }

    #[test]
    fn rejected_submission_restores_control_immediately() {
        let log: Log = Rc::default();

        let err = run(&RejectingSink, &log, "ok@example.com").unwrap_err();

        assert_eq!(err.to_string(), "Subscription failed: list closed");
        assert_eq!(
            *log.borrow(),
            vec![
                Step::Phase("Subscribing...", true),
                Step::Phase("Get My 10% Off Code", false),
            ]
        );
    }

    #[test]
    fn only_ready_control_is_enabled() {
        assert!(!SubmitPhase::Ready.is_disabled());
        assert!(SubmitPhase::Subscribing.is_disabled());
        assert!(SubmitPhase::Subscribed.is_disabled());
        assert_eq!(SubmitPhase::default(), SubmitPhase::Ready);
    }
}
