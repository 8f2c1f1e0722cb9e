//! FAQ disclosure panels.

/// Transition applied to every panel. Identical across items.
pub const PANEL_TRANSITION: &str = "height 0.3s ease-out, opacity 0.3s ease-out";

/// Inline style values for a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    pub height: String,
    pub opacity: &'static str,
}

impl PanelStyle {
    pub fn collapsed() -> Self {
        Self {
            height: "0".to_string(),
            opacity: "0",
        }
    }

    /// Fully open at the panel's measured content height.
    pub fn expanded(natural_height: i32) -> Self {
        Self {
            height: format!("{}px", natural_height.max(0)),
            opacity: "1",
        }
    }
}

/// Open/closed state of one accordion item.
///
/// The `<details>` element owns the real state; this mirrors it so the
/// panel style and the summary's `aria-expanded` are always derived from
/// the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Style for the first render. Items open in markup keep their
    /// natural size, so there is nothing to apply.
    pub fn initial_style(&self) -> Option<PanelStyle> {
        (!self.open).then(PanelStyle::collapsed)
    }

    /// Record a toggle and return the style to animate towards.
    pub fn toggle(&mut self, open: bool, natural_height: i32) -> PanelStyle {
        self.open = open;
        if open {
            PanelStyle::expanded(natural_height)
        } else {
            PanelStyle::collapsed()
        }
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closed_items_start_collapsed() {
        let item = Disclosure::new(false);
        assert_eq!(item.initial_style(), Some(PanelStyle::collapsed()));
        assert_eq!(item.aria_expanded(), "false");
    }

    #[test]
    fn items_open_in_markup_keep_natural_size() {
        let item = Disclosure::new(true);
        assert_eq!(item.initial_style(), None);
        assert_eq!(item.aria_expanded(), "true");
    }

    #[test]
    fn opening_uses_measured_height() {
        let mut item = Disclosure::new(false);
        let style = item.toggle(true, 148);

        assert_eq!(style.height, "148px");
        assert_eq!(style.opacity, "1");
        assert_eq!(item.aria_expanded(), "true");
    }

    #[test]
    fn open_then_close_returns_to_initial_state() {
        let mut item = Disclosure::new(false);
        let before = item.initial_style();

        item.toggle(true, 96);
        let after = item.toggle(false, 96);

        assert_eq!(Some(after), before);
        assert!(!item.is_open());
        assert_eq!(item.aria_expanded(), "false");
    }

    #[test]
    fn negative_measurement_clamps_to_zero() {
        assert_eq!(PanelStyle::expanded(-4).height, "0px");
    }
}
