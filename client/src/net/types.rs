//! Wire types for the article API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry in the recent-articles listing (home cards and sidebar).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    /// ISO `YYYY-MM-DD` display date.
    pub date: String,
    pub category: String,
    /// Plain-text teaser; tags and comments are already stripped.
    pub summary: String,
}

/// A full article as rendered by the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDoc {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    /// Rendered HTML body. Produced by the server's own renderer, so the
    /// client injects it as-is.
    pub body_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see_more_html: Option<String>,
}
