//! Home page: the newest articles as cards, with the sidebar alongside.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::sidebar::Sidebar;
use crate::state::articles::ArticlesState;

/// Landing page listing the newest articles.
#[component]
pub fn HomePage() -> impl IntoView {
    let articles = expect_context::<RwSignal<ArticlesState>>();

    view! {
        <div class="page page--home">
            <main class="page__main">
                <Show when=move || articles.get().loading>
                    <p class="page__loading">"Loading articles..."</p>
                </Show>
                <Show when=move || !articles.get().loading && articles.get().recent.is_empty()>
                    <p class="page__empty">"No articles yet."</p>
                </Show>
                <div class="article-list">
                    <For
                        each=move || articles.get().home_window()
                        key=|article| article.slug.clone()
                        children=|article| view! { <ArticleCard article=article/> }
                    />
                </div>
            </main>
            <Sidebar/>
        </div>
    }
}
