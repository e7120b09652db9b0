//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::panel::PanelPage;
use crate::state::{desk::DeskState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
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
/// Each mount owns a fresh ticket store, so every browser session starts
/// from the sample dataset and never sees another session's edits.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let desk = RwSignal::new(DeskState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(desk);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/tamir-desk.css"/>
        <Title text="Tamir Merkezi"/>

        <Router>
            <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                <Route path=StaticSegment("") view=PanelPage/>
            </Routes>
        </Router>
    }
}
