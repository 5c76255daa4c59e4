//! Fade-in of page sections as they scroll into view.
//!
//! Shortly after mount every `section` is made transparent and nudged down,
//! then an `IntersectionObserver` restores it once a tenth of it is visible.
//! If the observer cannot be created the sections are left untouched.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay before sections are hidden, so first paint is not blank.
pub const REVEAL_DELAY_MS: u32 = 100;
/// Visible fraction that triggers the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Inline style applied before observing.
pub const HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style applied on intersection.
pub const REVEALED_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Hide and observe sections after `REVEAL_DELAY_MS`.
#[cfg(feature = "hydrate")]
pub fn schedule() {
    gloo_timers::callback::Timeout::new(REVEAL_DELAY_MS, observe_sections).forget();
}

#[cfg(feature = "hydrate")]
fn observe_sections() {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(sections) = document.query_selector_all("section") else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(section) = entry.target().dyn_into::<web_sys::HtmlElement>() {
                    apply_style(&section, REVEALED_STYLE);
                }
            }
        },
    );
    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable, skipping fade-in: {err:?}");
            return;
        }
    };
    // The observer keeps calling back for the lifetime of the page.
    callback.forget();

    for i in 0..sections.length() {
        let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        apply_style(&section, HIDDEN_STYLE);
        observer.observe(&section);
    }
}

#[cfg(feature = "hydrate")]
fn apply_style(element: &web_sys::HtmlElement, style: &[(&str, &str)]) {
    let css = element.style();
    for (property, value) in style {
        if let Err(err) = css.set_property(property, value) {
            leptos::logging::warn!("failed to set {property}: {err:?}");
        }
    }
}
