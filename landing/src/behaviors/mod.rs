//! Browser wiring for the page behaviors.
//!
//! [`PageRegions::resolve`] is the only place that looks elements up in the
//! document. Every `setup_*` routine receives the elements it works on
//! explicitly, which keeps them usable against detached test fixtures.
//!
//! Developed by the Petal web team (c)2026

mod accordion;
mod hero;
mod nav;
mod reveal;
mod scroll;

pub use accordion::setup_accordion;
pub use hero::{setup_entrance, ANIMATE_CLASS};
pub use nav::{paint_active_link, setup_active_link, setup_smooth_scroll, ACTIVE_CLASS};
pub use reveal::{setup_scroll_reveal, REVEAL_CLASS};
pub use scroll::{
    setup_footer_reveal, setup_parallax, setup_scroll_to_top, FOOTER_VISIBLE_CLASS,
    SCROLL_TOP_BUTTON_ID,
};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlDetailsElement, HtmlElement, IntersectionObserverEntry, Window,
};

use crate::config::LandingConfig;
use crate::error::SetupError;

/// Elements the behaviors operate on, looked up once at startup.
pub struct PageRegions {
    pub body: Option<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub hero_headline: Option<Element>,
    pub hero_ctas: Vec<Element>,
    /// Every `.section`, hero included. Drives the active nav link.
    pub sections: Vec<Element>,
    /// Sections that fade in on scroll (hero excluded).
    pub reveal_sections: Vec<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub faq_items: Vec<HtmlDetailsElement>,
    pub footer: Option<Element>,
}

impl PageRegions {
    pub fn resolve(document: &Document) -> Result<Self, SetupError> {
        Ok(Self {
            body: document.body(),
            hero: document
                .get_element_by_id("hero")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            hero_headline: document.query_selector("#hero h1")?,
            hero_ctas: select_all(document, "#hero a.button, #hero a.link")?,
            sections: select_all(document, ".section")?,
            reveal_sections: select_all(document, ".section:not(#hero)")?,
            nav_links: select_all(document, ".header ul a")?,
            anchors: select_all(document, "a[href^=\"#\"]")?,
            faq_items: select_all(document, ".faq-item")?,
            footer: document.get_element_by_id("footer"),
        })
    }
}

/// Wire every behavior. Each one is independent: a failure is logged and
/// the rest still install.
pub fn install(window: &Window, document: &Document, config: &LandingConfig) {
    let regions = match PageRegions::resolve(document) {
        Ok(regions) => regions,
        Err(err) => {
            log::error!("[behaviors] could not resolve page regions: {err}");
            return;
        }
    };

    report(
        "hero entrance",
        setup_entrance(regions.hero_headline, regions.hero_ctas, config),
    );
    report(
        "scroll reveal",
        setup_scroll_reveal(regions.reveal_sections, config),
    );
    report(
        "smooth scroll",
        setup_smooth_scroll(window, document, &regions.anchors),
    );
    report(
        "active link",
        setup_active_link(&regions.sections, &regions.nav_links),
    );
    report("accordion", setup_accordion(&regions.faq_items));
    report(
        "scroll to top",
        setup_scroll_to_top(window, document, regions.body.as_ref(), config),
    );
    report(
        "parallax",
        setup_parallax(window, regions.hero.as_ref(), config),
    );
    report(
        "footer reveal",
        setup_footer_reveal(window, regions.footer.as_ref(), config),
    );
}

fn report(feature: &str, outcome: Result<(), SetupError>) {
    match outcome {
        Ok(()) => log::debug!("[behaviors] {feature} ready"),
        Err(err) => log::error!("[behaviors] {feature} disabled: {err}"),
    }
}

/// All matches of `selector` that are of type `T`, in document order.
fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SetupError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// First match of `selector` under `root`, if it is of type `T`.
fn select_within<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>, SetupError> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

/// `(target, is_intersecting, intersection_ratio)` for each entry of an
/// observer callback.
fn intersection_entries(entries: &js_sys::Array) -> Vec<(Element, bool, f64)> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| {
            (
                entry.target(),
                entry.is_intersecting(),
                entry.intersection_ratio(),
            )
        })
        .collect()
}

/// Identity comparison (`===`) between two elements.
fn same_element(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}
