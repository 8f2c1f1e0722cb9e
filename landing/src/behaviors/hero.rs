use leptos::prelude::set_timeout;
use web_sys::Element;

use crate::config::LandingConfig;
use crate::error::SetupError;

pub const ANIMATE_CLASS: &str = "animate";

/// Start the hero entrance animation shortly after mount.
///
/// Stagger between the headline and the CTAs is handled by CSS delays.
pub fn setup_entrance(
    headline: Option<Element>,
    ctas: Vec<Element>,
    config: &LandingConfig,
) -> Result<(), SetupError> {
    if headline.is_none() && ctas.is_empty() {
        return Ok(());
    }

    set_timeout(
        move || {
            for el in headline.iter().chain(ctas.iter()) {
                let _ = el.class_list().add_1(ANIMATE_CLASS);
            }
        },
        config.hero_delay(),
    );
    Ok(())
}
