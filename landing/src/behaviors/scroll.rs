use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::LandingConfig;
use crate::error::SetupError;
use crate::interactions::{parallax_position, FooterReveal, ScrollTopVisibility};

pub const SCROLL_TOP_BUTTON_ID: &str = "scrollToTopBtn";
pub const FOOTER_VISIBLE_CLASS: &str = "visible";

const HERO_BACKGROUND: &str = "radial-gradient(circle at 10% 20%, rgba(255,255,255,0.1) 0%, \
    rgba(255,255,255,0.05) 50%, transparent 70%), \
    linear-gradient(135deg, var(--color-pink) 0%, var(--color-lavender) 100%)";

/// Create the floating scroll-to-top button and toggle it with the scroll
/// offset.
pub fn setup_scroll_to_top(
    window: &Window,
    document: &Document,
    body: Option<&HtmlElement>,
    config: &LandingConfig,
) -> Result<(), SetupError> {
    let body = body.ok_or(SetupError::MissingElement("body"))?;

    let button: HtmlElement = document
        .create_element("button")?
        .dyn_into()
        .map_err(|_| SetupError::UnexpectedElement("button"))?;
    button.set_inner_html("&#9650;");
    button.set_id(SCROLL_TOP_BUTTON_ID);
    button.set_attribute("aria-label", "Scroll to top")?;
    body.append_child(&button)?;

    let threshold = config.scroll_top_offset;
    paint_scroll_top(window, &button, threshold);

    let on_scroll = {
        let window = window.clone();
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || paint_scroll_top(&window, &button, threshold))
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    let on_click = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

fn paint_scroll_top(window: &Window, button: &HtmlElement, threshold: f64) {
    let Ok(scroll_y) = window.scroll_y() else {
        return;
    };
    let visibility = ScrollTopVisibility::from_offset(scroll_y, threshold);
    let style = button.style();
    let _ = style.set_property("opacity", visibility.opacity());
    let _ = style.set_property("visibility", visibility.visibility());
}

/// Drift the hero background slower than the page. A page without a hero
/// is left alone.
pub fn setup_parallax(
    window: &Window,
    hero: Option<&HtmlElement>,
    config: &LandingConfig,
) -> Result<(), SetupError> {
    let Some(hero) = hero else {
        return Ok(());
    };

    // Vertical position is driven from the scroll listener below.
    let style = hero.style();
    style.set_property("background-attachment", "scroll")?;
    style.set_property("background-repeat", "no-repeat")?;
    style.set_property("background-size", "cover")?;
    style.set_property("background-image", HERO_BACKGROUND)?;

    let factor = config.parallax_factor;
    let on_scroll = {
        let window = window.clone();
        let hero = hero.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Ok(scroll_y) = window.scroll_y() else {
                return;
            };
            let _ = hero
                .style()
                .set_property("background-position-y", &parallax_position(scroll_y, factor));
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Show the footer once it nears the viewport bottom, then stop listening.
pub fn setup_footer_reveal(
    window: &Window,
    footer: Option<&Element>,
    config: &LandingConfig,
) -> Result<(), SetupError> {
    let footer = footer.ok_or(SetupError::MissingElement("#footer"))?.clone();
    let state = Rc::new(Cell::new(FooterReveal::new(config.footer_margin)));

    if reveal_footer(window, &footer, &state) {
        return Ok(());
    }

    // The listener owns a handle to itself so it can detach on first reveal.
    let listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let on_scroll = {
        let window = window.clone();
        let listener = listener.clone();
        Closure::<dyn FnMut()>::new(move || {
            if !reveal_footer(&window, &footer, &state) {
                return;
            }
            if let Some(callback) = listener.borrow().as_ref() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
            log::debug!("[footer] revealed");
        })
    };
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    *listener.borrow_mut() = Some(on_scroll);
    Ok(())
}

fn reveal_footer(window: &Window, footer: &Element, state: &Cell<FooterReveal>) -> bool {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default();
    let top = footer.get_bounding_client_rect().top();

    let mut reveal = state.get();
    let fired = reveal.check(top, viewport_height);
    state.set(reveal);

    if fired {
        let _ = footer.class_list().add_1(FOOTER_VISIBLE_CLASS);
    }
    fired
}
