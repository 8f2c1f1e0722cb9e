use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

use super::intersection_entries;
use crate::error::SetupError;
use crate::interactions::{fragment_target, ActiveLink};

pub const ACTIVE_CLASS: &str = "active";

/// Zero-height band across the middle of the viewport.
const CENTER_BAND_MARGIN: &str = "-50% 0px -50% 0px";

/// Smooth-scroll same-page links and record the fragment in history.
///
/// Links to `#` or to ids that do not exist keep the browser default.
pub fn setup_smooth_scroll(
    window: &Window,
    document: &Document,
    anchors: &[Element],
) -> Result<(), SetupError> {
    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();

        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };

            event.prevent_default();

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);

            let pushed = window.history().and_then(|history| {
                history.push_state_with_url(&JsValue::NULL, "", Some(href.as_str()))
            });
            if let Err(err) = pushed {
                log::warn!("[nav] history update failed: {err:?}");
            }
        });

        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Mark the navigation link of the section crossing the viewport center.
pub fn setup_active_link(sections: &[Element], links: &[Element]) -> Result<(), SetupError> {
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }

    let state = Rc::new(RefCell::new(ActiveLink::new(
        links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default()),
    )));
    let links = links.to_vec();

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let batch: Vec<(String, bool)> = intersection_entries(&entries)
            .into_iter()
            .map(|(target, intersecting, _)| (target.id(), intersecting))
            .collect();

        let mut state = state.borrow_mut();
        if state.apply(batch.iter().map(|(id, hit)| (id.as_str(), *hit))) {
            paint_active_link(&links, &state);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(CENTER_BAND_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.0));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in sections {
        observer.observe(section);
    }

    callback.forget();
    Ok(())
}

/// Put [`ACTIVE_CLASS`] on the active link and take it off every other one.
pub fn paint_active_link(links: &[Element], state: &ActiveLink) {
    for (idx, link) in links.iter().enumerate() {
        if let Err(err) = link
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, state.is_active(idx))
        {
            log::warn!("[nav] could not repaint link {idx}: {err:?}");
        }
    }
}
