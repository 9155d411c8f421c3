//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=dark_mode::root_class(ThemeState::default().dark_mode)>
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
/// Owns the theme flag and provides it to the page via context. The theme
/// marker on `<html>` is re-applied whenever the flag changes, including
/// the first run after mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    Effect::new(move || dark_mode::apply(theme.get().dark_mode));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Ghanshyam Hadiya | Portfolio"/>
        <HomePage/>
    }
}
