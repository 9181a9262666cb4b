//! Fetched article lists shared across pages.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::types::ArticleSummary;

/// Number of article cards shown on the home page.
pub const HOME_ARTICLE_COUNT: usize = 5;

/// Article lists fetched from the server, newest first.
///
/// `loading` is true from app start until the first fetch resolves; the
/// server renders the loading state and the browser fills the lists in
/// after hydration.
#[derive(Clone, Debug)]
pub struct ArticlesState {
    pub loading: bool,
    pub recent: Vec<ArticleSummary>,
}

impl Default for ArticlesState {
    fn default() -> Self {
        Self {
            loading: true,
            recent: Vec::new(),
        }
    }
}

impl ArticlesState {
    /// The home page window: the newest [`HOME_ARTICLE_COUNT`] entries.
    /// The sidebar renders the full fetched list.
    #[must_use]
    pub fn home_window(&self) -> Vec<ArticleSummary> {
        self.recent
            .iter()
            .take(HOME_ARTICLE_COUNT)
            .cloned()
            .collect()
    }
}
