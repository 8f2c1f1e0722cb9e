//! # petal-landing
//!
//! Leptos CSR landing page for the Petal subscription box.
//!
//! The crate is split in three layers:
//!
//! - [`interactions`] - plain state types for every page behavior (reveal
//!   tracking, active navigation link, accordion panels, email validation,
//!   the subscription flow, scroll-driven effects). No DOM access, tested
//!   natively.
//! - [`behaviors`] - `web-sys` setup routines that take explicit element
//!   references and drive the interaction types from browser events.
//! - [`sections`] - Leptos components rendering the page markup, including
//!   the lead-capture form.
//!
//! Developed by the Petal web team (c)2026

pub mod behaviors;
pub mod config;
pub mod error;
pub mod interactions;
pub mod sections;

pub use config::LandingConfig;
pub use error::{ConfigError, SetupError};
