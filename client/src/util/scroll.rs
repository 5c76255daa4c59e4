//! Smooth scrolling for in-page anchors.
//!
//! A click on `a[href^="#"]` is intercepted: a bare `#` scrolls to the top, a
//! `#id` naming an element scrolls so the section clears the fixed nav, and
//! anything else is left to the browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;

/// Gap kept between the nav's bottom edge and the section top.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget<'a> {
    Top,
    Section(&'a str),
}

/// Classify an anchor `href`. Non-fragment links return `None`.
pub fn scroll_target(href: &str) -> Option<ScrollTarget<'_>> {
    match href.strip_prefix('#')? {
        "" => Some(ScrollTarget::Top),
        id => Some(ScrollTarget::Section(id)),
    }
}

/// Scroll position that puts a section `SCROLL_MARGIN_PX` below the nav.
pub fn scroll_offset(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height - SCROLL_MARGIN_PX
}

/// Document click hook: smooth-scroll fragment links and close the mobile menu.
#[cfg(feature = "hydrate")]
pub fn handle_anchor_click(ev: &web_sys::Event, ui: RwSignal<UiState>) {
    use wasm_bindgen::JsCast as _;

    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let (Some(target), Some(window)) = (scroll_target(&href), web_sys::window()) else {
        return;
    };

    match target {
        ScrollTarget::Top => {
            ev.prevent_default();
            smooth_scroll_to(&window, 0.0);
        }
        ScrollTarget::Section(id) => {
            let Some(document) = window.document() else {
                return;
            };
            let Some(section) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            let nav_height = document
                .query_selector("nav")
                .ok()
                .flatten()
                .and_then(|nav| nav.dyn_into::<web_sys::HtmlElement>().ok())
                .map_or(0, |nav| nav.offset_height());
            smooth_scroll_to(&window, scroll_offset(f64::from(section.offset_top()), f64::from(nav_height)));
            if ui.get_untracked().menu_open {
                ui.update(|u| {
                    u.close_menu();
                });
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
