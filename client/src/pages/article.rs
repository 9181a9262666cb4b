//! Article page: fetches one article by slug and renders its HTML body.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::ArticleDoc;

/// One article, addressed as `/article/:slug`.
///
/// The body is HTML produced by the server's own renderer, so it is
/// injected directly. A failed fetch shows the not-found state.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();

    let doc = RwSignal::new(None::<ArticleDoc>);
    let missing = RwSignal::new(false);

    // Refetch whenever the route param changes; navigating between articles
    // does not unmount this component.
    Effect::new(move || {
        let Some(slug) = params.read().get("slug") else {
            return;
        };
        doc.set(None);
        missing.set(false);
        leptos::task::spawn_local(async move {
            match api::fetch_article(&slug).await {
                Some(fetched) => doc.set(Some(fetched)),
                None => missing.set(true),
            }
        });
    });

    view! {
        <div class="page page--article">
            <main class="page__main">
                <Show when=move || missing.get()>
                    <p class="page__missing">"Article not found."</p>
                </Show>
                {move || {
                    doc.get().map(|d| {
                        view! {
                            <article class="article">
                                <h1 class="article__title">{d.title}</h1>
                                <p class="article__meta">
                                    <span class="article__date">{d.date}</span>
                                    <span class="article__category">{d.category}</span>
                                </p>
                                <div class="article__body" inner_html=d.body_html></div>
                                {d.see_more_html.map(|html| view! {
                                    <section class="article__see-more">
                                        <h2 class="article__see-more-heading">"See more"</h2>
                                        <div inner_html=html></div>
                                    </section>
                                })}
                            </article>
                        }
                    })
                }}
            </main>
            <Sidebar/>
        </div>
    }
}
