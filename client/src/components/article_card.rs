//! Card for one article in the home page listing.

use leptos::prelude::*;

use crate::net::types::ArticleSummary;

/// Home page card linking to an article.
#[component]
pub fn ArticleCard(article: ArticleSummary) -> impl IntoView {
    let href = format!("/article/{}", article.slug);

    view! {
        <a class="article-card" href=href>
            <h2 class="article-card__title">{article.title}</h2>
            <p class="article-card__meta">
                <span class="article-card__date">{article.date}</span>
                <span class="article-card__category">{article.category}</span>
            </p>
            <p class="article-card__summary">{article.summary}</p>
        </a>
    }
}
