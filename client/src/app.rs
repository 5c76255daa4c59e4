//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::theme_notification::ThemeNotification;
use crate::pages::home::HomePage;
use crate::state::{notice::NoticeState, theme::ThemeState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, notice and menu contexts, then runs the one-time
/// browser setup once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let notice = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(notice);
    provide_context(ui);

    // Effects only run in the browser, so the theme pick never happens during SSR.
    Effect::new(move || {
        crate::util::theme_dom::initialize(theme, notice);
        #[cfg(feature = "hydrate")]
        {
            crate::util::page_events::install(ui);
            crate::util::reveal::schedule();
        }
    });

    view! {
        <Stylesheet id="leptos" href="/landing.css"/>
        <Title text="Landing"/>

        <HomePage/>
        <ThemeNotification/>
    }
}
