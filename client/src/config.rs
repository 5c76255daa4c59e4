//! Build-time site configuration.
//!
//! The client has no runtime environment, so deploy-specific values are
//! baked in at compile time from `LANDING_*` variables with local defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Feed location used when `LANDING_FEED_URL` is unset at build time.
pub const DEFAULT_FEED_URL: &str = "/index.xml";
/// Blog home used as the manual fallback link when `LANDING_BLOG_URL` is unset.
pub const DEFAULT_BLOG_URL: &str = "/";

pub const DEFAULT_FEED_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_MAX_POSTS: usize = 3;
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 150;
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;
pub const DEFAULT_REFRESH_DEBOUNCE_MS: u32 = 500;

/// Feed fetching and card rendering knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    pub feed_url: String,
    pub blog_url: String,
    pub timeout_ms: u32,
    pub max_posts: usize,
    pub description_limit: usize,
    pub words_per_minute: usize,
    pub refresh_debounce_ms: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_owned(),
            blog_url: DEFAULT_BLOG_URL.to_owned(),
            timeout_ms: DEFAULT_FEED_TIMEOUT_MS,
            max_posts: DEFAULT_MAX_POSTS,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            refresh_debounce_ms: DEFAULT_REFRESH_DEBOUNCE_MS,
        }
    }
}

impl FeedConfig {
    /// Build the config from `LANDING_FEED_URL` / `LANDING_BLOG_URL` captured
    /// at compile time.
    pub fn from_build_env() -> Self {
        Self::with_urls(option_env!("LANDING_FEED_URL"), option_env!("LANDING_BLOG_URL"))
    }

    /// Apply optional URL overrides on top of the defaults. Blank values are
    /// treated as unset.
    pub fn with_urls(feed_url: Option<&str>, blog_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank(feed_url) {
            config.feed_url = url.to_owned();
        }
        if let Some(url) = non_blank(blog_url) {
            config.blog_url = url.to_owned();
        }
        config
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
