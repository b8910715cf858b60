//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::contact::ContactFormState;
use crate::state::nav::NavState;
use crate::state::settings::Settings;
use crate::state::theme::{SiteTheme, ThemeController};
use crate::util::dark_mode::DocumentRoot;
use crate::util::storage::BrowserStore;

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
/// Provides every piece of page state through context. The server always
/// renders the light theme; the persisted [`Settings`] are loaded once after
/// hydration and handed to a fresh theme controller.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme: RwSignal<SiteTheme> =
        RwSignal::new(ThemeController::new(Settings::default(), BrowserStore, DocumentRoot));
    let nav = RwSignal::new(NavState::default());
    let contact = RwSignal::new(ContactFormState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(contact);

    // Effects only run in the browser, so this is the startup read.
    Effect::new(move || {
        let settings = Settings::load(&BrowserStore);
        theme.set(ThemeController::new(settings, BrowserStore, DocumentRoot));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Emmanuel Okezie — Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
