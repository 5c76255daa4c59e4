//! Live-region toast naming the newly applied theme.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Mounted while a notice exists; the `show` class drives the CSS transition.
#[component]
pub fn ThemeNotification() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <Show when=move || notice.get().text.is_some()>
            <div
                class="theme-notification"
                class:show=move || notice.get().visible
                role="status"
                aria-live="polite"
            >
                <span class="theme-notification__icon" aria-hidden="true">"🎨"</span>
                <span>{move || notice.get().text.unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
