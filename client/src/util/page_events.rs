//! Document-level listeners for page chrome.
//!
//! Listeners registered here live for the whole page, so their closures are
//! leaked into the JS heap rather than tied to a component scope.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use crate::state::ui::{UiState, should_close_menu};

/// Register `handler` for `event` on `document`. Missing document is a no-op.
pub fn on_document(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to listen for {event}: {err:?}");
        return;
    }
    callback.forget();
}

/// Wire smooth scrolling and outside-click menu closing.
pub fn install(ui: RwSignal<UiState>) {
    on_document("click", move |ev| {
        super::scroll::handle_anchor_click(&ev, ui);
        close_menu_on_outside_click(&ev, ui);
    });
}

fn close_menu_on_outside_click(ev: &web_sys::Event, ui: RwSignal<UiState>) {
    if !ui.get_untracked().menu_open {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let contains_target = |el: Option<web_sys::Element>| el.is_some_and(|el| el.contains(target.as_ref()));

    let inside_menu = contains_target(document.get_element_by_id("menu"));
    let inside_toggle = contains_target(document.query_selector(".mobile-toggle").ok().flatten());
    if should_close_menu(true, inside_menu, inside_toggle) {
        ui.update(|u| {
            u.close_menu();
        });
    }
}
