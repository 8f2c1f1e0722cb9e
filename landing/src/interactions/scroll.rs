//! Scroll-offset driven effects: scroll-to-top button, hero parallax, footer.

/// Visibility of the floating scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTopVisibility {
    Shown,
    Hidden,
}

impl ScrollTopVisibility {
    /// Shown strictly past `threshold` pixels of scroll.
    pub fn from_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            Self::Shown => "1",
            Self::Hidden => "0",
        }
    }

    pub fn visibility(self) -> &'static str {
        match self {
            Self::Shown => "visible",
            Self::Hidden => "hidden",
        }
    }
}

/// Hero background offset (px) for a page scroll offset.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    -scroll_y * factor
}

/// CSS value for `background-position-y`.
pub fn parallax_position(scroll_y: f64, factor: f64) -> String {
    format!("{}px", parallax_offset(scroll_y, factor))
}

/// Fires once when the footer's top edge comes within `margin` of the
/// viewport bottom.
#[derive(Debug, Clone, Copy)]
pub struct FooterReveal {
    margin: f64,
    revealed: bool,
}

impl FooterReveal {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            revealed: false,
        }
    }

    /// Returns `true` only on the check that reveals the footer.
    pub fn check(&mut self, footer_top: f64, viewport_height: f64) -> bool {
        if self.revealed || footer_top >= viewport_height - self.margin {
            return false;
        }
        self.revealed = true;
        true
    }

    #[cfg(test)]
    fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn button_shows_strictly_past_threshold() {
        assert_eq!(ScrollTopVisibility::from_offset(0.0, 400.0), ScrollTopVisibility::Hidden);
        assert_eq!(ScrollTopVisibility::from_offset(400.0, 400.0), ScrollTopVisibility::Hidden);
        assert_eq!(ScrollTopVisibility::from_offset(400.5, 400.0), ScrollTopVisibility::Shown);
    }

    #[test]
    fn button_style_values() {
        let shown = ScrollTopVisibility::Shown;
        let hidden = ScrollTopVisibility::Hidden;
        assert_eq!((shown.opacity(), shown.visibility()), ("1", "visible"));
        assert_eq!((hidden.opacity(), hidden.visibility()), ("0", "hidden"));
    }

    #[test]
    fn parallax_moves_at_factor_of_scroll() {
        assert_eq!(parallax_offset(0.0, 0.3), 0.0);
        assert_eq!(parallax_offset(100.0, 0.3), -30.0);
        assert_eq!(parallax_position(200.0, 0.5), "-100px");
    }

    #[test]
    fn footer_reveals_inside_margin() {
        let mut footer = FooterReveal::new(80.0);

        assert!(!footer.check(900.0, 800.0));
        assert!(!footer.check(720.0, 800.0));
        assert!(footer.check(719.0, 800.0));
        assert!(footer.is_revealed());
    }

    #[test]
    fn footer_fires_only_once() {
        let mut footer = FooterReveal::new(80.0);
        assert!(footer.check(100.0, 800.0));
        assert!(!footer.check(50.0, 800.0));
        assert!(!footer.check(2000.0, 800.0));
        assert!(footer.is_revealed());
    }
}
