//! Root application component with routing, shared state, and page chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::scroll_to_top::ScrollToTopButton;
use crate::components::theme_toggle::ThemeToggleButton;
use crate::pages::{article::ArticlePage, home::HomePage};
use crate::state::articles::ArticlesState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root element carries `data-theme="light"` so the server output
/// matches the client's default before the stored preference is applied.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
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
/// Provides the shared article list, fetches it once after hydration, and
/// mounts the page chrome (theme toggle, scroll-to-top) around the routes so
/// both live for the page's whole lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let articles = RwSignal::new(ArticlesState::default());
    provide_context(articles);

    // One fetch feeds both the home cards and the sidebar.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_recent_articles().await;
            articles.update(|state| {
                state.loading = false;
                state.recent = fetched.unwrap_or_default();
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lantern.css"/>
        <Title text="Lantern"/>

        <header class="site-header">
            <a class="site-header__home" href="/">"Lantern"</a>
            <ThemeToggleButton/>
        </header>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("article"), ParamSegment("slug")) view=ArticlePage/>
            </Routes>
        </Router>

        <ScrollToTopButton/>
    }
}
