use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverInit};

use super::{intersection_entries, same_element};
use crate::config::LandingConfig;
use crate::error::SetupError;
use crate::interactions::RevealTracker;

pub const REVEAL_CLASS: &str = "reveal";

/// Fade sections in the first time at least `reveal_threshold` of their
/// area is in view.
///
/// A revealed section is unobserved right away, so it can never fade out
/// again.
pub fn setup_scroll_reveal(
    sections: Vec<Element>,
    config: &LandingConfig,
) -> Result<(), SetupError> {
    if sections.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new(config.reveal_threshold)));
    let observed = sections.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<(usize, bool, f64)> = intersection_entries(&entries)
                .into_iter()
                .filter_map(|(target, intersecting, ratio)| {
                    observed
                        .iter()
                        .position(|section| same_element(section, &target))
                        .map(|idx| (idx, intersecting, ratio))
                })
                .collect();

            for idx in tracker.borrow_mut().record(batch) {
                let section = &observed[idx];
                let _ = section.class_list().add_1(REVEAL_CLASS);
                observer.unobserve(section);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in &sections {
        observer.observe(section);
    }

    callback.forget();
    log::debug!("[reveal] observing {} sections", sections.len());
    Ok(())
}
