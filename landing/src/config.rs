//! Tuning values for the page behaviors.
//!
//! Every value has a default matching the shipped design. A page may override
//! any subset through an inline JSON document:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "scroll_top_offset": 600, "subscriber_name": "Friend" }
//! </script>
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the inline `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    /// Scroll offset (px) past which the scroll-to-top button shows.
    pub scroll_top_offset: f64,
    /// Hero background speed relative to the page scroll.
    pub parallax_factor: f64,
    /// Distance (px) above the viewport bottom at which the footer reveals.
    pub footer_margin: f64,
    pub hero_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
    /// Placeholder name sent along with every lead.
    pub subscriber_name: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.2,
            scroll_top_offset: 400.0,
            parallax_factor: 0.3,
            footer_margin: 80.0,
            hero_delay_ms: 100,
            submit_delay_ms: 1000,
            reset_delay_ms: 2000,
            subscriber_name: "Subscriber".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse overrides from JSON; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults.
    ///
    /// A malformed document is logged and ignored so a typo in the markup
    /// never takes the interactions down.
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("[config] loaded overrides from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(err) => {
                log::warn!("[config] {err}; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal_threshold",
                expected: "between 0 and 1",
                value: self.reveal_threshold,
            });
        }
        let non_negative = [
            ("scroll_top_offset", self.scroll_top_offset),
            ("parallax_factor", self.parallax_factor),
            ("footer_margin", self.footer_margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    field,
                    expected: "a non-negative number",
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn hero_delay(&self) -> Duration {
        Duration::from_millis(self.hero_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_keeps_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn partial_override_merges_with_defaults() {
        let config =
            LandingConfig::from_json(r#"{ "scroll_top_offset": 600, "subscriber_name": "Friend" }"#)
                .unwrap();

        assert_eq!(config.scroll_top_offset, 600.0);
        assert_eq!(config.subscriber_name, "Friend");
        assert_eq!(config.submit_delay(), Duration::from_millis(1000));
        assert_eq!(config.reset_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LandingConfig::from_json(r#"{ "scroll_top": 600 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        let err = LandingConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("reveal_threshold"));
    }

    #[test]
    fn negative_offsets_are_rejected() {
        let err = LandingConfig::from_json(r#"{ "footer_margin": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "footer_margin",
                ..
            }
        ));
    }
}
