//! Blog feed loading and visibility-driven refresh.
//!
//! DESIGN
//! ======
//! The first fetch starts on mount. Each time the tab becomes visible again a
//! refresh is scheduled after a short debounce, and a newer visibility event
//! restarts the timer instead of stacking fetches. Fetches that still overlap
//! are resolved by `FeedSequencer`: only the newest ticket publishes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::page_events::on_document;
use crate::config::FeedConfig;
use crate::net::feed::fetch_latest;
use crate::state::feed::{FeedSequencer, FeedState, PendingRefresh, should_publish};

/// Load the feed now and again whenever the page regains visibility.
pub fn start(feed: RwSignal<FeedState>, config: FeedConfig) {
    let sequencer = FeedSequencer::default();
    let alive = Arc::new(AtomicBool::new(true));
    spawn_refresh(feed, sequencer.clone(), config.clone(), alive.clone());

    let alive_listener = alive.clone();
    let mut pending: PendingRefresh<Timeout> = PendingRefresh::default();
    on_document("visibilitychange", move |_| {
        if !alive_listener.load(Ordering::Relaxed) {
            return;
        }
        let hidden = web_sys::window()
            .and_then(|w| w.document())
            .is_none_or(|d| d.hidden());
        if hidden {
            return;
        }
        let delay_ms = config.refresh_debounce_ms;
        let (sequencer, config, alive) = (sequencer.clone(), config.clone(), alive_listener.clone());
        pending.restart(Timeout::new(delay_ms, move || spawn_refresh(feed, sequencer, config, alive)));
    });

    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

fn spawn_refresh(feed: RwSignal<FeedState>, sequencer: FeedSequencer, config: FeedConfig, alive: Arc<AtomicBool>) {
    leptos::task::spawn_local(async move {
        let ticket = sequencer.begin();
        let next = fetch_latest(&config).await;
        if should_publish(alive.load(Ordering::Relaxed), &sequencer, ticket) {
            feed.set(next);
        } else {
            leptos::logging::log!("discarding blog feed response #{ticket}");
        }
    });
}
