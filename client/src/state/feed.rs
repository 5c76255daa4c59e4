//! Blog grid state and refresh sequencing.
//!
//! DESIGN
//! ======
//! The grid always renders exactly one `FeedState`, replaced wholesale when a
//! fetch completes. Refreshes can overlap (tab refocus while a fetch is in
//! flight), so every fetch takes a ticket from `FeedSequencer` and only the
//! newest ticket may publish its result.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::feed::FeedError;
use crate::net::rss::FeedItem;

pub const EMPTY_FEED_MESSAGE: &str = "No blog posts found.";

/// What the blog grid shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    /// First fetch still in flight.
    #[default]
    Loading,
    Posts(Vec<FeedItem>),
    /// The feed parsed but held no items.
    Empty,
    /// Fetch or parse failed; `message` is user-facing.
    Failed { message: String },
}

impl FeedState {
    pub fn from_result(result: Result<Vec<FeedItem>, FeedError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Posts(items),
            Err(err) => Self::Failed { message: err.user_message().to_owned() },
        }
    }
}

/// Monotonic ticket counter shared by every refresh of one grid.
#[derive(Clone, Debug, Default)]
pub struct FeedSequencer {
    latest: Arc<AtomicU64>,
}

impl FeedSequencer {
    /// Claim a ticket for a new fetch, superseding all earlier tickets.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` is still the newest fetch.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

/// Whether a finished fetch may replace the grid: the grid must still be
/// mounted and `ticket` must be the newest one issued.
pub fn should_publish(alive: bool, sequencer: &FeedSequencer, ticket: u64) -> bool {
    alive && sequencer.is_current(ticket)
}

/// Holder for the one scheduled refresh timer.
///
/// `H` is a timer handle that cancels on drop (`gloo_timers::callback::Timeout`
/// in the browser), so restarting drops the previous handle and only the last
/// scheduled refresh fires.
#[derive(Debug)]
pub struct PendingRefresh<H> {
    timer: Option<H>,
}

impl<H> Default for PendingRefresh<H> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<H> PendingRefresh<H> {
    /// Replace any scheduled refresh with `timer`.
    pub fn restart(&mut self, timer: H) {
        drop(self.timer.replace(timer));
    }

    /// Drop the scheduled refresh, if any.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some()
    }
}
