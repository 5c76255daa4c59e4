//! Page footer.

use chrono::Datelike;
use leptos::prelude::*;

/// Calendar year shown in `#year`.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " <span id="year">{current_year()}</span> " All rights reserved."</p>
        </footer>
    }
}
