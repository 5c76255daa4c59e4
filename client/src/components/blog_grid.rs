//! Recent-posts grid.
//!
//! DESIGN
//! ======
//! The grid renders a single `FeedState` and swaps the whole card set when it
//! changes, so every refresh is one replacement rather than incremental
//! inserts. Loading and refresh scheduling live in `util::feed_refresh`.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::config::FeedConfig;
use crate::state::feed::{EMPTY_FEED_MESSAGE, FeedState};

/// `#blogGrid`: up to three post cards, an empty state, or an error panel
/// linking to the blog itself.
#[component]
pub fn BlogGrid() -> impl IntoView {
    let config = FeedConfig::from_build_env();
    let feed = RwSignal::new(FeedState::Loading);
    let blog_url = config.blog_url.clone();

    #[cfg(feature = "hydrate")]
    crate::util::feed_refresh::start(feed, config);

    view! {
        <div id="blogGrid" class="blog-grid" aria-busy=move || matches!(feed.get(), FeedState::Loading).to_string()>
            {move || match feed.get() {
                FeedState::Loading => view! { <div class="loading">"Loading posts..."</div> }.into_any(),
                FeedState::Posts(items) => {
                    items.into_iter().map(|item| view! { <BlogCard item=item/> }).collect_view().into_any()
                }
                FeedState::Empty => view! { <div class="error">{EMPTY_FEED_MESSAGE}</div> }.into_any(),
                FeedState::Failed { message } => {
                    let blog_url = blog_url.clone();
                    view! {
                        <div class="error">
                            <p>{message}</p>
                            <p>
                                <a href=blog_url target="_blank" rel="noopener noreferrer" class="button">
                                    "Visit Blog Directly"
                                </a>
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
