//! Sidebar listing the most recent articles.

use leptos::prelude::*;

use crate::state::articles::ArticlesState;

/// Recent-article link list shown beside page content.
///
/// Reads the shared [`ArticlesState`]; `App` fetches it once after
/// hydration, so the sidebar stays consistent across page navigations.
#[component]
pub fn Sidebar() -> impl IntoView {
    let articles = expect_context::<RwSignal<ArticlesState>>();

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__heading">"Recent articles"</h2>
            <Show when=move || articles.get().loading>
                <p class="sidebar__loading">"Loading..."</p>
            </Show>
            <ul class="sidebar__list">
                <For
                    each=move || articles.get().recent
                    key=|article| article.slug.clone()
                    children=|article| {
                        let href = format!("/article/{}", article.slug);
                        view! {
                            <li class="sidebar__item">
                                <a href=href>{article.title}</a>
                                <span class="sidebar__date">{article.date}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}
