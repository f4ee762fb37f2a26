//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::settings::PageSettings;
use crate::state::{calendar::CalendarState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let lang = PageSettings::default().lang;
    view! {
        <!DOCTYPE html>
        <html lang=lang>
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
/// Provides page settings and the widget state contexts, then routes `/` to
/// the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = PageSettings::default();
    provide_context(settings);
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(CalendarState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/homepage.css"/>
        <Title text=settings.title/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
