//! Card for one recent blog post.

use leptos::prelude::*;

use crate::net::rss::FeedItem;

/// A post summary linking out to the full article.
///
/// Feed text is rendered as text nodes, so markup in titles or descriptions
/// shows literally instead of being injected.
#[component]
pub fn BlogCard(item: FeedItem) -> impl IntoView {
    let FeedItem { title, link, description, published, read_minutes } = item;

    view! {
        <a href=link target="_blank" rel="noopener noreferrer" class="blog-card">
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="blog-meta">
                <span class="blog-date">{published}</span>
                <div class="read-time">
                    <span class="read-time__icon" aria-hidden="true">"🕑"</span>
                    <span>{format!("{read_minutes} min read")}</span>
                </div>
            </div>
        </a>
    }
}
