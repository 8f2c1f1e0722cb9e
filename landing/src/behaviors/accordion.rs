use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlDetailsElement, HtmlElement};

use super::select_within;
use crate::error::SetupError;
use crate::interactions::{Disclosure, PanelStyle, PANEL_TRANSITION};

/// Animate every FAQ `<details>` panel and keep `aria-expanded` in sync.
///
/// An item that cannot be wired is logged and skipped; the others still get
/// their listener.
pub fn setup_accordion(items: &[HtmlDetailsElement]) -> Result<(), SetupError> {
    let failed = wire_each(items, wire_item);
    if failed > 0 {
        log::warn!("[accordion] {failed} of {} items left unwired", items.len());
    }
    Ok(())
}

/// Run `wire` on every item, logging failures. Returns how many failed.
fn wire_each<T>(items: &[T], mut wire: impl FnMut(&T) -> Result<(), SetupError>) -> usize {
    let mut failed = 0;
    for (idx, item) in items.iter().enumerate() {
        if let Err(err) = wire(item) {
            log::warn!("[accordion] item {idx}: {err}");
            failed += 1;
        }
    }
    failed
}

fn wire_item(item: &HtmlDetailsElement) -> Result<(), SetupError> {
    let panel: Option<HtmlElement> = select_within(item, "p")?;
    let summary: Option<Element> = select_within(item, "summary")?;
    let disclosure = Rc::new(Cell::new(Disclosure::new(item.open())));

    if let Some(panel) = &panel {
        let style = panel.style();
        style.set_property("overflow", "hidden")?;
        style.set_property("transition", PANEL_TRANSITION)?;
        if let Some(initial) = disclosure.get().initial_style() {
            apply_panel_style(panel, &initial)?;
        }
    }

    if let Some(summary) = &summary {
        summary.set_attribute("role", "button")?;
        summary.set_attribute("aria-expanded", disclosure.get().aria_expanded())?;
    }

    let details = item.clone();
    let on_toggle = Closure::<dyn FnMut()>::new(move || {
        let mut state = disclosure.get();
        let natural_height = panel.as_ref().map_or(0, |p| p.scroll_height());
        let style = state.toggle(details.open(), natural_height);
        disclosure.set(state);

        if let Some(panel) = &panel {
            if let Err(err) = apply_panel_style(panel, &style) {
                log::warn!("[accordion] {err}");
            }
        }
        if let Some(summary) = &summary {
            if let Err(err) = summary.set_attribute("aria-expanded", state.aria_expanded()) {
                log::warn!("[accordion] aria-expanded update failed: {err:?}");
            }
        }
    });

    item.add_event_listener_with_callback("toggle", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();
    Ok(())
}

fn apply_panel_style(panel: &HtmlElement, style: &PanelStyle) -> Result<(), SetupError> {
    let css = panel.style();
    css.set_property("height", &style.height)?;
    css.set_property("opacity", style.opacity)?;
    Ok(())
}
