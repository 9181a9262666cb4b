//! REST helpers for the article API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None`; pages render their loading state and fetch after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed or 404 fetch
//! degrades to the page's empty/missing state without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{ArticleDoc, ArticleSummary};

/// Fetch the recent-article window from `/api/articles`, newest first.
/// Returns `None` on the server or when the request fails.
pub async fn fetch_recent_articles() -> Option<Vec<ArticleSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/articles")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ArticleSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one article from `/api/articles/{slug}`.
/// Returns `None` on the server, for unknown slugs, or when the request fails.
pub async fn fetch_article(slug: &str) -> Option<ArticleDoc> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/articles/{slug}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ArticleDoc>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}
