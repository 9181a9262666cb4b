//! The article library.
//!
//! SYSTEM CONTEXT
//! ==============
//! Articles are plain text files in a content directory; there is no
//! database. The library scans the directory once at startup, renders each
//! source to HTML, and serves lookups from memory. A background task
//! rescans on an interval so new, changed, and deleted files show up
//! without a restart; change detection compares file mtimes.
//!
//! ERROR HANDLING
//! ==============
//! Directory-level IO errors are returned to the caller (fatal at startup).
//! Per-file failures (unreadable content, malformed dates) are logged and
//! the file is skipped, so one bad article never takes the site down.

pub mod article;
pub mod decorate;


use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use time::OffsetDateTime;

use crate::state::AppState;
use self::article::Article;

/// Number of articles in the recent window served to the sidebar.
pub const RECENT_WINDOW: usize = 20;

/// Interval between content-directory rescans.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Errors from loading the article library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("content io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid date {value:?} in {file}")]
    InvalidDate { file: String, value: String },
}

/// One loaded article plus the bookkeeping needed for refresh.
struct Entry {
    article: Article,
    path: PathBuf,
    mtime: SystemTime,
}

/// In-memory article collection, sorted newest first.
pub struct Library {
    content_dir: PathBuf,
    entries: Vec<Entry>,
}

impl Library {
    /// Scan the content directory and load every readable article.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read. Individual
    /// unreadable files are logged and skipped.
    pub fn scan(content_dir: &Path) -> Result<Self, LibraryError> {
        let mut library = Self {
            content_dir: content_dir.to_owned(),
            entries: Vec::new(),
        };
        library.refresh()?;
        Ok(library)
    }

    /// Re-walk the content directory: load new files, reload files whose
    /// mtime moved forward, drop files that disappeared. Returns the number
    /// of entries that changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn refresh(&mut self) -> Result<usize, LibraryError> {
        let today = OffsetDateTime::now_utc().date();
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut changed = 0usize;

        for dir_entry in fs::read_dir(&self.content_dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if path.extension().map_or(true, |ext| ext != "md") {
                continue;
            }
            seen.insert(path.clone());

            let mtime = dir_entry.metadata()?.modified()?;
            let known = self.entries.iter().position(|e| e.path == path);
            if let Some(idx) = known {
                if self.entries[idx].mtime >= mtime {
                    continue;
                }
            }

            match Self::load_file(&path, mtime, today) {
                Ok(loaded) => {
                    match known {
                        Some(idx) => self.entries[idx] = loaded,
                        None => self.entries.push(loaded),
                    }
                    changed += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping article");
                }
            }
        }

        let before = self.entries.len();
        self.entries.retain(|e| seen.contains(&e.path));
        changed += before - self.entries.len();

        if changed > 0 {
            self.entries.sort_by(|a, b| {
                b.article
                    .date
                    .cmp(&a.article.date)
                    .then_with(|| a.article.slug.cmp(&b.article.slug))
            });
        }
        Ok(changed)
    }

    fn load_file(path: &Path, mtime: SystemTime, today: time::Date) -> Result<Entry, LibraryError> {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let raw = fs::read_to_string(path)?;
        let article = Article::from_source(stem, &raw, today)?;
        Ok(Entry {
            article,
            path: path.to_owned(),
            mtime,
        })
    }

    /// The newest `limit` articles.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Article> {
        self.entries.iter().take(limit).map(|e| &e.article)
    }

    /// Look one article up by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.entries
            .iter()
            .find(|e| e.article.slug == slug)
            .map(|e| &e.article)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Spawn the background task that keeps the library in sync with the
/// content directory.
pub fn spawn_refresh_task(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(REFRESH_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let mut library = state.library.write().await;
            match library.refresh() {
                Ok(0) => {}
                Ok(changed) => tracing::info!(changed, "article library refreshed"),
                Err(err) => tracing::warn!(error = %err, "article library refresh failed"),
            }
        }
    })
}
