//! Bounded feed fetch and failure classification.
//!
//! Client-side (hydrate): `gloo-net` GET with an `AbortController` that the
//! timeout timer fires. The race itself is plain `futures`, so the whole
//! fetch → parse → state pipeline runs natively under test with stub sources.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged and folded into a `FeedState::Failed` panel; the
//! grid never propagates an error to the rest of the page. Only a timeout gets
//! its own user-facing wording.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use super::rss::parse_feed;
use crate::config::FeedConfig;
use crate::state::feed::FeedState;

pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please check your connection.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to load blog posts at the moment.";

/// Failures while loading the blog feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// No response arrived before the timeout fired.
    #[error("request timed out")]
    Timeout,

    /// The body was not well-formed XML.
    #[error("failed to parse RSS feed: {0}")]
    Parse(String),
}

impl FeedError {
    /// Message shown in the grid's error panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => TIMEOUT_MESSAGE,
            Self::Network(_) | Self::Status(_) | Self::Parse(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Anything that can produce a feed body.
pub trait FeedSource {
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>>;
}

/// Resolve `fetch` unless `timeout` completes first.
///
/// When both are ready on the same poll the fetch wins.
///
/// # Errors
///
/// Returns [`FeedError::Timeout`] if `timeout` finishes first, otherwise the
/// fetch's own error.
pub async fn fetch_with_timeout<F, T>(fetch: F, timeout: T) -> Result<String, FeedError>
where
    F: Future<Output = Result<String, FeedError>>,
    T: Future<Output = ()>,
{
    match select(pin!(fetch), pin!(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FeedError::Timeout),
    }
}

/// Fetch, parse, and classify the feed into the state the grid renders.
pub async fn load_feed<S, T>(source: &S, timeout: T, config: &FeedConfig) -> FeedState
where
    S: FeedSource,
    T: Future<Output = ()>,
{
    let result = fetch_with_timeout(source.fetch(), timeout)
        .await
        .and_then(|body| parse_feed(&body, config));
    if let Err(err) = &result {
        leptos::logging::error!("error loading blog posts: {err}");
    }
    FeedState::from_result(result)
}

// =============================================================================
// BROWSER
// =============================================================================

/// `fetch()`-backed source bound to one abort signal.
#[cfg(feature = "hydrate")]
pub struct HttpFeedSource {
    url: String,
    signal: Option<web_sys::AbortSignal>,
}

#[cfg(feature = "hydrate")]
impl HttpFeedSource {
    pub fn new(url: impl Into<String>, signal: Option<web_sys::AbortSignal>) -> Self {
        Self { url: url.into(), signal }
    }
}

#[cfg(feature = "hydrate")]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let resp = gloo_net::http::Request::get(&self.url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FeedError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| FeedError::Network(e.to_string()))
    }
}

/// Load the configured feed in the browser, aborting the request after
/// `config.timeout_ms`.
#[cfg(feature = "hydrate")]
pub async fn fetch_latest(config: &FeedConfig) -> FeedState {
    let controller = match web_sys::AbortController::new() {
        Ok(controller) => Some(controller),
        Err(err) => {
            leptos::logging::warn!("AbortController unavailable, timeout will not cancel the request: {err:?}");
            None
        }
    };
    let source = HttpFeedSource::new(config.feed_url.clone(), controller.as_ref().map(web_sys::AbortController::signal));
    let timeout_ms = config.timeout_ms;
    let timeout = async move {
        gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
        if let Some(controller) = controller {
            controller.abort();
        }
    };
    load_feed(&source, timeout, config).await
}
