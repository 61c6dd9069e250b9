//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::config::{BackendConfig, META_NAME};
use crate::pages::{
    chunks::ChunksPage, dashboard::DashboardPage, documents::DocumentsPage, exams::ExamsPage, query::QueryPage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `backend_url` is injected as a meta tag so the WASM client calls the
/// backend configured on the host.
pub fn shell(options: LeptosOptions, backend_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=backend_url/>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BackendConfig::from_document());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin.css"/>
        <Title text="ESLCE Admin"/>

        <Router>
            <Navigation/>
            <main class="admin-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("documents") view=DocumentsPage/>
                    <Route path=StaticSegment("chunks") view=ChunksPage/>
                    <Route path=StaticSegment("exams") view=ExamsPage/>
                    <Route path=StaticSegment("query") view=QueryPage/>
                </Routes>
            </main>
        </Router>
    }
}
