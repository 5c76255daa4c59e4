use super::*;

#[test]
fn default_config_matches_documented_limits() {
    let config = FeedConfig::default();
    assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    assert_eq!(config.blog_url, DEFAULT_BLOG_URL);
    assert_eq!(config.timeout_ms, 10_000);
    assert_eq!(config.max_posts, 3);
    assert_eq!(config.description_limit, 150);
    assert_eq!(config.words_per_minute, 200);
}

#[test]
fn with_urls_applies_overrides() {
    let config = FeedConfig::with_urls(Some("https://blog.example/index.xml"), Some("https://blog.example"));
    assert_eq!(config.feed_url, "https://blog.example/index.xml");
    assert_eq!(config.blog_url, "https://blog.example");
    assert_eq!(config.max_posts, DEFAULT_MAX_POSTS);
}

#[test]
fn with_urls_ignores_blank_values() {
    let config = FeedConfig::with_urls(Some("   "), None);
    assert_eq!(config, FeedConfig::default());
}
