//! Browser side of the theme selector.
//!
//! Applies `data-theme` to `<body>`, persists through `localStorage`, and
//! drives the notification's animation timers. Without `hydrate` only the
//! signals change.

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::storage::open_store;
use crate::state::notice::NoticeState;
use crate::state::theme::{ThemeMap, ThemeState, display_name};

/// Body attribute the stylesheet keys theme rules on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page-load theme pick.
pub fn initialize(theme: RwSignal<ThemeState>, notice: RwSignal<NoticeState>) {
    let store = open_store();
    let next = ThemeState::initialize(store.as_ref(), &ThemeMap::builtin(), &mut seeded_rng());
    commit(next, theme, notice);
}

/// Dark/light toggle click.
pub fn toggle(theme: RwSignal<ThemeState>, notice: RwSignal<NoticeState>) {
    let store = open_store();
    let next = theme.get_untracked().toggle(store.as_ref(), &ThemeMap::builtin());
    commit(next, theme, notice);
}

fn commit(next: ThemeState, theme: RwSignal<ThemeState>, notice: RwSignal<NoticeState>) {
    if let Some(id) = next.theme.as_deref() {
        apply_body_theme(id);
        announce(notice, display_name(id));
    }
    theme.set(next);
}

/// Set `data-theme` on `<body>`. Missing document or body is a no-op.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply_body_theme(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.set_attribute(THEME_ATTRIBUTE, id) {
            leptos::logging::warn!("failed to apply theme {id}: {err:?}");
        }
    }
}

/// Replace the current notice with `text` and run its show/hide cycle.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn announce(notice: RwSignal<NoticeState>, text: String) {
    let seq = notice.try_update(|n| n.show(text));
    #[cfg(feature = "hydrate")]
    if let Some(seq) = seq {
        schedule_notice(notice, seq);
    }
}

#[cfg(feature = "hydrate")]
fn schedule_notice(notice: RwSignal<NoticeState>, seq: u64) {
    use crate::state::notice::{NOTICE_FADE_MS, NOTICE_HOLD_MS};
    use gloo_timers::callback::Timeout;

    next_frame(move || notice.maybe_update(|n| n.reveal(seq)));
    Timeout::new(NOTICE_HOLD_MS, move || {
        notice.maybe_update(|n| n.hide(seq));
        Timeout::new(NOTICE_FADE_MS, move || notice.maybe_update(|n| n.clear(seq))).forget();
    })
    .forget();
}

/// Run `f` on the next animation frame so the class change after mount
/// triggers the CSS transition.
#[cfg(feature = "hydrate")]
fn next_frame(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        f();
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        leptos::logging::warn!("requestAnimationFrame failed: {err:?}");
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seeded_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64 ^ js_sys::Date::now() as u64;
    #[cfg(not(feature = "hydrate"))]
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    SmallRng::seed_from_u64(seed)
}
