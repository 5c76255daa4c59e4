//! Dark/light toggle button.

use leptos::prelude::*;

use crate::state::notice::NoticeState;
use crate::state::theme::ThemeState;

/// `#dark-mode-toggle`: swaps to the paired theme of the other mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <button
            id="dark-mode-toggle"
            class="dark-mode-toggle"
            type="button"
            aria-label=move || theme.get().mode.toggle_label()
            title=move || theme.get().mode.toggle_label()
            on:click=move |_| crate::util::theme_dom::toggle(theme, notice)
        >
            <span aria-hidden="true">{move || theme.get().mode.toggle_icon()}</span>
        </button>
    }
}
