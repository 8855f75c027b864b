//! Presentational behaviors that carry no content: scroll reveal, smooth
//! anchor scrolling and the mobile menu.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};

use crate::config::Settings;
use crate::dom::document;

pub const MENU_OPEN_CLASS: &str = "nav__menu--active";

/// Document offset to scroll to so the section lands just below the header.
pub fn scroll_target_top(section_offset: f64, header_height: f64, gap: f64) -> f64 {
    section_offset - header_height - gap
}

pub fn menu_icon(open: bool) -> &'static str {
    if open {
        "✕"
    } else {
        "☰"
    }
}

fn elements(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn element(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

pub fn init_all(settings: &Settings) {
    if let Err(e) = init_scroll_reveal(settings) {
        warn!("Scroll reveal unavailable: {:?}", e);
    }
    init_smooth_scrolling(settings.scroll_offset);
    init_mobile_menu();
}

/// Fades each `.section` in the first time it scrolls into view.
pub fn init_scroll_reveal(settings: &Settings) -> Result<(), JsValue> {
    let sections = elements(".section");
    for section in &sections {
        section.class_list().add_1("fade-in-section")?;
    }

    let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("visible");
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.reveal_threshold));
    options.set_root_margin(settings.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    debug!("Observing {} sections for reveal", sections.len());
    Ok(())
}

/// Intercepts in-page anchor clicks and scrolls smoothly, leaving room for
/// the fixed header.
pub fn init_smooth_scrolling(gap: f64) {
    for link in elements("a[href^=\"#\"]") {
        let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let Some(anchor) = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|a| a.get_attribute("href"))
            else {
                return;
            };
            let Some(section) = element(&anchor).and_then(|s| s.dyn_into::<HtmlElement>().ok()) else {
                return;
            };
            let header_height = element(".header")
                .and_then(|h| h.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |h| f64::from(h.offset_height()));

            let options = ScrollToOptions::new();
            options.set_top(scroll_target_top(
                f64::from(section.offset_top()),
                header_height,
                gap,
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Some(w) = window() {
                w.scroll_to_with_scroll_to_options(&options);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if link
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            callback.forget();
        }
    }
}

/// Burger toggle for narrow screens. Does nothing when the page has no
/// navigation toggle.
pub fn init_mobile_menu() {
    let (Some(toggle), Some(menu)) = (element(".nav__toggle"), element(".nav__menu")) else {
        debug!("No mobile menu on this page");
        return;
    };

    {
        let menu = menu.clone();
        let icon = toggle.clone();
        let callback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let open = menu.class_list().toggle(MENU_OPEN_CLASS).unwrap_or(false);
            icon.set_text_content(Some(menu_icon(open)));
        }) as Box<dyn FnMut(MouseEvent)>);
        if toggle
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            callback.forget();
        }
    }

    for link in elements(".nav__link") {
        let menu = menu.clone();
        let icon = toggle.clone();
        let callback = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = menu.class_list().remove_1(MENU_OPEN_CLASS);
            icon.set_text_content(Some(menu_icon(false)));
        }) as Box<dyn FnMut(MouseEvent)>);
        if link
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            callback.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_leaves_room_for_the_header() {
        assert_eq!(scroll_target_top(900.0, 80.0, 20.0), 800.0);
        assert_eq!(scroll_target_top(50.0, 80.0, 20.0), -50.0);
    }

    #[test]
    fn icon_follows_menu_state() {
        assert_eq!(menu_icon(true), "✕");
        assert_eq!(menu_icon(false), "☰");
    }
}
