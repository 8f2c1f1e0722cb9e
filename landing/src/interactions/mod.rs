// Page interaction state, free of DOM access
// Developed by the Petal web team (c)2026

pub mod accordion;
pub mod active_link;
pub mod anchor;
pub mod email;
pub mod reveal;
pub mod scroll;
pub mod subscribe;

pub use accordion::{Disclosure, PanelStyle, PANEL_TRANSITION};
pub use active_link::ActiveLink;
pub use anchor::fragment_target;
pub use email::{is_valid_email, validate_email, EmailError};
pub use reveal::RevealTracker;
pub use scroll::{parallax_offset, parallax_position, FooterReveal, ScrollTopVisibility};
pub use subscribe::{
    run_submission, BrowserTimer, Confirmation, Lead, LeadSink, SimulatedSink, SubmitPhase,
    SubscribeError, Timer,
};
