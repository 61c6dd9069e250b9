//! Root application component with routing and app-wide context.

use curriculum::{CoursePreference, ProgressBook};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::bottom_nav::BottomNav;
use crate::net::api;
use crate::pages::{
    chat::ChatPage, home::HomePage, profile::ProfilePage, quiz::QuizPage, search::SearchPage,
    simulator::SimulatorPage, topic::TopicPage, unit::UnitPage,
};
use crate::state::catalog::CatalogState;
use crate::util::storage;

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
/// Provides `RwSignal<CatalogState>`, `RwSignal<ProgressBook>`, and
/// `RwSignal<CoursePreference>`. Browser storage and the catalog are read
/// once after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::loading());
    let progress = RwSignal::new(ProgressBook::default());
    let preference = RwSignal::new(CoursePreference::default());
    provide_context(catalog);
    provide_context(progress);
    provide_context(preference);

    Effect::new(move || {
        progress.set(storage::load_progress());
        preference.set(storage::load_preference());
        leptos::task::spawn_local(async move {
            let result = api::fetch_catalog().await;
            if let Err(e) = &result {
                leptos::logging::warn!("catalog load failed: {e}");
            }
            catalog.update(|c| c.finish(result));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/student.css"/>
        <Title text="ESLCE Prep"/>

        <Router>
            <main class="student-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("unit"), ParamSegment("course"), ParamSegment("unit")) view=UnitPage/>
                    <Route
                        path=(StaticSegment("topic"), ParamSegment("course"), ParamSegment("unit"), ParamSegment("topic"))
                        view=TopicPage
                    />
                    <Route
                        path=(StaticSegment("quiz"), ParamSegment("kind"), ParamSegment("course"), ParamSegment("unit"))
                        view=QuizPage
                    />
                    <Route
                        path=(
                            StaticSegment("quiz"),
                            ParamSegment("kind"),
                            ParamSegment("course"),
                            ParamSegment("unit"),
                            ParamSegment("topic"),
                        )
                        view=QuizPage
                    />
                    <Route path=StaticSegment("eslce-simulator") view=SimulatorPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                </Routes>
            </main>
            <BottomNav/>
        </Router>
    }
}
