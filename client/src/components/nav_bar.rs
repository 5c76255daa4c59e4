//! Top navigation with the mobile menu and theme toggle.
//!
//! DESIGN
//! ======
//! Menu state lives in `UiState` so the document-level click handler (smooth
//! scroll, outside click) can close the menu the nav opened.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.get().menu_open;

    view! {
        <nav class="nav">
            <a href="#" class="nav__logo">"Landing"</a>
            <ul id="menu" class="nav__menu" class:active=menu_open>
                <li><a href="#about">"About"</a></li>
                <li><a href="#blog">"Blog"</a></li>
                <li><a href="#contact">"Contact"</a></li>
            </ul>
            <div class="cta" class:active=menu_open>
                <a href="#contact" class="button">"Get in touch"</a>
            </div>
            <ThemeToggle/>
            <button
                class="mobile-toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-controls="menu"
                aria-expanded=move || if menu_open() { "true" } else { "false" }
                on:click=move |_| {
                    ui.update(|u| {
                        u.toggle_menu();
                    });
                }
            >
                <span aria-hidden="true">"☰"</span>
            </button>
        </nav>
    }
}
