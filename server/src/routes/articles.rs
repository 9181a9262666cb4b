//! Article API handlers.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::library::article::Article;
use crate::library::RECENT_WINDOW;
use crate::state::AppState;

/// One entry in the recent-articles listing.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub summary: String,
}

/// A full rendered article.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDoc {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub body_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_more_html: Option<String>,
}

fn summary_of(article: &Article) -> ArticleSummary {
    ArticleSummary {
        slug: article.slug.clone(),
        title: article.title.clone(),
        date: article.display_date(),
        category: article.category.clone(),
        summary: article.summary.clone(),
    }
}

fn doc_of(article: &Article) -> ArticleDoc {
    ArticleDoc {
        slug: article.slug.clone(),
        title: article.title.clone(),
        date: article.display_date(),
        category: article.category.clone(),
        body_html: article.body_html.clone(),
        see_more_html: article.see_more_html.clone(),
    }
}

/// `GET /api/articles`: the recent window, newest first.
pub async fn list_recent(State(state): State<AppState>) -> Json<Vec<ArticleSummary>> {
    let library = state.library.read().await;
    Json(library.recent(RECENT_WINDOW).map(summary_of).collect())
}

/// `GET /api/articles/{slug}`: one rendered article, 404 for unknown slugs.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDoc>, StatusCode> {
    let library = state.library.read().await;
    library
        .get(&slug)
        .map(doc_of)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
